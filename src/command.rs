//! The chat-side entry point: `/roll 2d6+3` or `/r d20+DEX`.

const COMMANDS: &[&str] = &["/roll", "/r"];

/// Returns the expression part of a roll command, or `None` when the line is
/// not one. A bare `/roll` yields an empty expression, which the roller then
/// rejects.
pub fn parse_roll_command(line: &str) -> Option<&str> {
    let line = line.trim_start();
    COMMANDS.iter().find_map(|cmd| {
        let rest = line.strip_prefix(cmd)?;
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            Some(rest.trim())
        } else {
            None
        }
    })
}
