use crate::models::Classification;

/// Maps a board identifier to the kind of body it filters for
#[derive(Debug, Clone)]
pub struct ClassificationTable {
    entries: Vec<(u32, Classification)>,
}

impl ClassificationTable {
    pub fn new(entries: Vec<(u32, Classification)>) -> Self {
        Self { entries }
    }

    /// Board 27 is the City Council, board 28 the Planning Commission
    pub fn stevenson() -> Self {
        Self::new(vec![
            (27, Classification::CityCouncil),
            (28, Classification::Commission),
        ])
    }

    pub fn classify(&self, board_id: u32) -> Classification {
        self.entries
            .iter()
            .find(|(id, _)| *id == board_id)
            .map(|(_, classification)| *classification)
            .unwrap_or(Classification::NotClassified)
    }
}

impl Default for ClassificationTable {
    fn default() -> Self {
        Self::stevenson()
    }
}
