use crate::classify::PLATFORM_OTHER;
use crate::classify::builtin::{HOST_RULES, IP_RULES};
use crate::classify::error::ClassifierError;
use ipnet::IpNet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

static BUILTIN: Lazy<Classifier> = Lazy::new(Classifier::builtin);

/// Substring rule applied to lower-cased hostnames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRule {
    pub platform: String,
    pub needles: Vec<String>,
}

/// Operator-supplied CIDR rule, before the prefixes are parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpRuleSpec {
    pub platform: String,
    pub cidrs: Vec<String>,
}

/// CIDR rule applied to IP literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpRule {
    pub platform: String,
    pub nets: Vec<IpNet>,
}

#[derive(Debug, Clone)]
pub struct Classifier {
    host_rules: Vec<HostRule>,
    ip_rules: Vec<IpRule>,
}

impl Classifier {
    /// Classifier over the built-in tables only.
    pub fn builtin() -> Self {
        let host_rules = HOST_RULES
            .iter()
            .map(|(needles, platform)| HostRule {
                platform: (*platform).to_string(),
                needles: needles.iter().map(|n| (*n).to_string()).collect(),
            })
            .collect();

        let ip_rules = IP_RULES
            .iter()
            .map(|(cidrs, platform)| IpRule {
                platform: (*platform).to_string(),
                nets: cidrs
                    .iter()
                    .map(|c| c.parse().expect("built-in cidr table must be valid"))
                    .collect(),
            })
            .collect();

        Self {
            host_rules,
            ip_rules,
        }
    }

    pub(crate) fn builtin_shared() -> &'static Classifier {
        &BUILTIN
    }

    /// Built-in tables with operator rules evaluated first.
    ///
    /// Needles are lower-cased so they line up with the lower-cased hostnames they are tested
    /// against.
    pub fn with_rules(
        host_rules: &[HostRule],
        ip_rules: &[IpRuleSpec],
    ) -> Result<Self, ClassifierError> {
        let mut classifier = Self::builtin();

        let mut user_hosts = Vec::with_capacity(host_rules.len());
        for rule in host_rules {
            check_platform(&rule.platform)?;
            if rule.needles.is_empty() {
                return Err(ClassifierError::NoNeedles {
                    platform: rule.platform.clone(),
                });
            }
            if rule.needles.iter().any(|n| n.trim().is_empty()) {
                return Err(ClassifierError::EmptyNeedle {
                    platform: rule.platform.clone(),
                });
            }
            user_hosts.push(HostRule {
                platform: rule.platform.clone(),
                needles: rule
                    .needles
                    .iter()
                    .map(|n| n.trim().to_lowercase())
                    .collect(),
            });
        }

        let mut user_ips = Vec::with_capacity(ip_rules.len());
        for rule in ip_rules {
            check_platform(&rule.platform)?;
            if rule.cidrs.is_empty() {
                return Err(ClassifierError::NoCidrs {
                    platform: rule.platform.clone(),
                });
            }
            let nets = rule
                .cidrs
                .iter()
                .map(|cidr| {
                    parse_net(cidr).map_err(|source| ClassifierError::InvalidCidr {
                        platform: rule.platform.clone(),
                        cidr: cidr.clone(),
                        source,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            user_ips.push(IpRule {
                platform: rule.platform.clone(),
                nets,
            });
        }

        user_hosts.append(&mut classifier.host_rules);
        user_ips.append(&mut classifier.ip_rules);
        classifier.host_rules = user_hosts;
        classifier.ip_rules = user_ips;

        Ok(classifier)
    }

    pub fn host_rules(&self) -> &[HostRule] {
        &self.host_rules
    }

    pub fn ip_rules(&self) -> &[IpRule] {
        &self.ip_rules
    }

    /// Map a destination to its platform name.
    pub fn classify(&self, destination_host: &str, destination_ip: Option<&str>) -> &str {
        let host = destination_host.to_lowercase();

        if !host.is_empty() {
            if let Some(rule) = self
                .host_rules
                .iter()
                .find(|rule| rule.needles.iter().any(|needle| host.contains(needle.as_str())))
            {
                return &rule.platform;
            }
        }

        let ip = destination_ip
            .and_then(parse_ip)
            .or_else(|| parse_ip(destination_host));

        if let Some(ip) = ip {
            if let Some(rule) = self
                .ip_rules
                .iter()
                .find(|rule| rule.nets.iter().any(|net| net.contains(&ip)))
            {
                return &rule.platform;
            }
        }

        PLATFORM_OTHER
    }
}

fn check_platform(platform: &str) -> Result<(), ClassifierError> {
    if platform.trim().is_empty() {
        return Err(ClassifierError::EmptyPlatform);
    }
    if platform == PLATFORM_OTHER {
        return Err(ClassifierError::ReservedPlatform {
            platform: platform.to_string(),
        });
    }
    Ok(())
}

/// Accepts CIDR notation as well as a bare address (treated as a host route).
pub fn parse_net(cidr: &str) -> Result<IpNet, ipnet::AddrParseError> {
    let cidr = cidr.trim();
    match cidr.parse::<IpNet>() {
        Ok(net) => Ok(net),
        Err(err) => cidr.parse::<IpAddr>().map(IpNet::from).map_err(|_| err),
    }
}

fn parse_ip(value: &str) -> Option<IpAddr> {
    let value = value.trim();
    let value = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    value.parse().ok()
}
