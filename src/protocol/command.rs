#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    Position(String),
    Board,
    Layout,
    Status,
    Moves(Option<String>),
    Move(Vec<String>),
    Click(Option<String>),
    SetOption(Vec<String>),
    Options,
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let owned_args = || parts[1..].iter().map(|p| (*p).to_string()).collect::<Vec<String>>();

    let cmd = match parts[0] {
        "new" => Command::New,
        "position" => Command::Position(parts[1..].join(" ")),
        "board" | "d" => Command::Board,
        "layout" => Command::Layout,
        "status" => Command::Status,
        "moves" => Command::Moves(parts.get(1).map(|v| (*v).to_string())),
        "move" => Command::Move(owned_args()),
        "click" => Command::Click(parts.get(1).map(|v| (*v).to_string())),
        "setoption" => Command::SetOption(parts.iter().map(|p| (*p).to_string()).collect()),
        "options" => Command::Options,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
