use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("classifier rule has an empty platform name")]
    EmptyPlatform,

    #[error("platform '{platform}' is reserved for unclassified destinations")]
    ReservedPlatform { platform: String },

    #[error("host rule for platform '{platform}' has no needles")]
    NoNeedles { platform: String },

    #[error("host rule for platform '{platform}' contains an empty needle")]
    EmptyNeedle { platform: String },

    #[error("ip rule for platform '{platform}' has no cidrs")]
    NoCidrs { platform: String },

    #[error("invalid cidr '{cidr}' for platform '{platform}': {source}")]
    InvalidCidr {
        platform: String,
        cidr: String,
        #[source]
        source: ipnet::AddrParseError,
    },
}
