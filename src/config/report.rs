use serde::{Deserialize, Serialize};

/// Letterhead lines the attendance sheet has room for.
pub const MAX_LETTERHEAD_LINES: usize = 3;

/// Texts and layout switches of the printed reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Letterhead lines centered at the top of the attendance sheet, at most
    /// [`MAX_LETTERHEAD_LINES`]
    pub letterhead: Vec<String>,
    pub attendance_title: String,
    pub diary_title: String,
    /// Internship site printed in the attendance metadata block
    pub site: String,
    /// Oblique address line at the bottom of the attendance sheet
    pub footer_address: String,
    /// Optional logo (JPEG or PNG) drawn beside the letterhead
    pub logo_path: Option<String>,
    /// Maximum characters of an activity description in the diary table
    pub truncate_activity: usize,
    /// Redraw the column header row on continuation pages
    pub repeat_table_header: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            letterhead: vec![
                "ASSOCIAÇÃO TERESINENSE DE ENSINO S/C LTDA – ATE".to_string(),
                "CENTRO UNIVERSITÁRIO SANTO AGOSTINHO – UNIFSA".to_string(),
                "COORDENAÇÃO DO CURSO DE FARMÁCIA".to_string(),
            ],
            attendance_title: "CONTROLE DE FREQUÊNCIA".to_string(),
            diary_title: "DIÁRIO DE CAMPO - FARMÁCIA ESCOLA UNIFSA".to_string(),
            site: "Farmácia Escola UNIFSA".to_string(),
            footer_address: "Av. Barão de Gurguéia, 2636 - São Pedro, Teresina - PI, 64019-352"
                .to_string(),
            logo_path: None,
            truncate_activity: 50,
            repeat_table_header: false,
        }
    }
}
