use fontedit_engine::{BatchPixelChange, ChangeType, Face, PixelGrid, Result};

/// Notifications for the UI layer, drained with [`FaceModel::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontEditEvent {
    /// A new face replaced the previous one
    FaceLoaded,
    GlyphAdded { index: usize },
    GlyphChanged { index: usize },
    ActiveGlyphChanged { index: Option<usize> },
    /// Every glyph was restored to its original pixels
    FaceReset,
}

/// The face being edited plus the events its mutations produced.
///
/// This is the target all undo commands run against.
#[derive(Debug)]
pub struct FaceModel {
    face: Face,
    events: Vec<FontEditEvent>,
}

impl FaceModel {
    pub fn new(face: Face) -> Self {
        Self {
            face,
            events: vec![FontEditEvent::FaceLoaded],
        }
    }

    pub fn face(&self) -> &Face {
        &self.face
    }

    pub fn take_events(&mut self) -> Vec<FontEditEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn replace_face(&mut self, face: Face) {
        self.face = face;
        self.events.push(FontEditEvent::FaceLoaded);
    }

    pub fn modify_glyph(&mut self, index: usize, change: &BatchPixelChange, change_type: ChangeType) -> Result<()> {
        self.face.modify_glyph(index, change, change_type)?;
        self.events.push(FontEditEvent::GlyphChanged { index });
        Ok(())
    }

    pub fn set_glyph_pixels(&mut self, index: usize, pixels: &PixelGrid) -> Result<()> {
        self.face.set_glyph_pixels(index, pixels)?;
        self.events.push(FontEditEvent::GlyphChanged { index });
        Ok(())
    }

    pub fn reset_glyph(&mut self, index: usize) -> Result<()> {
        self.face.reset_glyph(index)?;
        self.events.push(FontEditEvent::GlyphChanged { index });
        Ok(())
    }

    pub fn set_active_glyph(&mut self, index: Option<usize>) -> Result<()> {
        self.face.set_active_glyph_index(index)?;
        self.events.push(FontEditEvent::ActiveGlyphChanged { index });
        Ok(())
    }

    pub fn add_glyph(&mut self, pixels: PixelGrid) -> Result<usize> {
        let index = self.face.add_glyph(pixels)?;
        self.events.push(FontEditEvent::GlyphAdded { index });
        Ok(index)
    }

    pub fn reset(&mut self) {
        self.face.reset();
        self.events.push(FontEditEvent::FaceReset);
    }
}
