/// Pointer cursor glyphs an application can request.
///
/// The runner maps these onto the platform cursor set once per event,
/// so applications never talk to the windowing layer directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorGlyph {
    #[default]
    Arrow,
    ResizeHorizontal,
    ResizeVertical,
    ResizeDiagonalNwse,
    ResizeDiagonalNesw,
}
