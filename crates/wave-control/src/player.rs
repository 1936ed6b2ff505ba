/// Command surface of the media player, owned by the player's event loop.
pub trait Player {
    /// Start playback. Implementations clear a whitespace-only text entry
    /// before playing, so a stray space does not become a search.
    fn play(&mut self);
    fn next(&mut self);
    fn previous(&mut self);
    fn volume_up(&mut self);
    fn volume_down(&mut self);
    fn toggle_mute(&mut self);

    fn is_text_entry_visible(&self) -> bool;
    fn text_entry_content(&self) -> String;
}
