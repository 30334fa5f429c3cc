/// UI events emitted by the font settings page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSettingsEvent {
    /// The page mounted; load and apply the persisted font.
    Mounted,
    /// A font option card was pressed.
    FontPressed(String),
}
