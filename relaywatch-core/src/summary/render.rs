use crate::summary::types::Summary;
use owo_colors::OwoColorize;
use std::fmt::Write;

const TOP_CLIENTS: usize = 15;
const TOP_UNMATCHED: usize = 10;
const BAR_WIDTH: f64 = 20.0;

/// Render a summary as a plain-text dashboard.
///
/// `color` toggles ANSI styling; tests and pipes get the unstyled form.
pub fn render_summary(summary: &Summary, color: bool) -> String {
    let mut out = String::new();
    let paint = Painter { color };

    let title = format!(
        "Relay Access ({}s window, {} mode)",
        summary.window_seconds,
        summary.mode.as_str()
    );
    let _ = writeln!(out, "{}", paint.title(&title));
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(
        out,
        "clients: {} | matched entries: {} | lookback: {} lines",
        summary.items.len(),
        summary.matched_entries,
        summary.lookback_lines
    );

    if let Some(error) = &summary.error {
        let _ = writeln!(out, "{} {error}", paint.error("error:"));
    }
    if let Some(detail) = &summary.detail {
        let _ = writeln!(out, "{} {detail}", paint.warn("note:"));
    }

    if !summary.sources.is_empty() {
        let sources: Vec<String> = summary
            .sources
            .iter()
            .map(|s| {
                let state = match s.connected {
                    Some(false) => " (down)",
                    _ => "",
                };
                let role = if s.is_primary { "*" } else { "" };
                format!("{}{role}{state}", s.source_name)
            })
            .collect();
        let _ = writeln!(out, "sources: {}", sources.join(", "));
    }
    out.push('\n');

    //-------------------------------------------------------------------------
    // Platforms
    //-------------------------------------------------------------------------
    if summary.platforms.is_empty() {
        out.push_str("Platforms: <no events in window>\n\n");
    } else {
        out.push_str("Platforms:\n");
        for share in &summary.platforms {
            let pct = share.percent * 100.0;
            let bars = ((share.percent * BAR_WIDTH).round() as usize).max(1);
            let _ = writeln!(
                out,
                "  {:<12} {} {:>4} {:>5.1}%",
                share.platform,
                paint.bar(&format!("{:<20}", "█".repeat(bars))),
                share.count,
                pct
            );
        }
        out.push('\n');
    }

    //-------------------------------------------------------------------------
    // Clients
    //-------------------------------------------------------------------------
    if !summary.items.is_empty() {
        out.push_str("Clients (most recent first):\n");
        for client in summary.items.iter().take(TOP_CLIENTS) {
            let platforms: Vec<String> = client
                .platforms
                .iter()
                .map(|p| format!("{}={}", p.platform, p.connections))
                .collect();
            let _ = writeln!(
                out,
                "  {:<28} {}  conn={:<3} route={} [{}]",
                client.user_label,
                client.last_seen.format("%H:%M:%S"),
                client.connections,
                if client.route.is_empty() { "-" } else { &client.route },
                platforms.join(" ")
            );
        }
        if summary.items.len() > TOP_CLIENTS {
            let _ = writeln!(out, "  ... {} more", summary.items.len() - TOP_CLIENTS);
        }
        out.push('\n');
    }

    //-------------------------------------------------------------------------
    // Unmatched
    //-------------------------------------------------------------------------
    if !summary.unmatched.is_empty() {
        let _ = writeln!(out, "Unclassified destinations ({}):", summary.unmatched.len());
        for entry in summary.unmatched.iter().take(TOP_UNMATCHED) {
            match &entry.destination_ip {
                Some(ip) if ip != &entry.destination => {
                    let _ = writeln!(out, "  {} ({ip})", entry.destination);
                }
                _ => {
                    let _ = writeln!(out, "  {}", entry.destination);
                }
            }
        }
        if summary.unmatched.len() > TOP_UNMATCHED {
            let _ = writeln!(out, "  ... {} more", summary.unmatched.len() - TOP_UNMATCHED);
        }
    }

    out
}

struct Painter {
    color: bool,
}

impl Painter {
    fn title(&self, s: &str) -> String {
        if self.color { s.bold().to_string() } else { s.to_string() }
    }

    fn error(&self, s: &str) -> String {
        if self.color { s.red().bold().to_string() } else { s.to_string() }
    }

    fn warn(&self, s: &str) -> String {
        if self.color { s.yellow().to_string() } else { s.to_string() }
    }

    fn bar(&self, s: &str) -> String {
        if self.color { s.cyan().to_string() } else { s.to_string() }
    }
}
