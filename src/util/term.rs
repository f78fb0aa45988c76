//! ANSI color constants and advisor output framing.

pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const YELLOW: &str = "\x1b[93m";
pub const CYAN: &str = "\x1b[96m";
pub const RESET: &str = "\x1b[0m";

/// Banner printed before the advisor sends a query.
pub fn sending_banner(query: &str) -> String {
    format!(
        "\n\n{CYAN}#!>>> TERMINAL ADVISOR: Sending for advice...\n\n{RESET}\
         {CYAN}Your query: \n{YELLOW}'{query}'{RESET}\n"
    )
}

/// Framed reply printed after the advisor responds.
pub fn reply_frame(reply: &str) -> String {
    format!(
        "{CYAN}#!>>> TERMINAL ADVISOR: Advisor responded:{RESET}\n\n\
         {GREEN}{reply}{RESET}\n\n===="
    )
}
