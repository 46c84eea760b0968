#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCommand {
    CloseModal,
    ToggleFullscreen,
}

#[inline]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "Escape" | "Esc" => Some(KeyCommand::CloseModal),
        "Enter" => Some(KeyCommand::ToggleFullscreen),
        _ => None,
    }
}
