use clap::ValueEnum;
use serde::Serialize;

/// One display column and its storage counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub display: &'static str,
    pub storage: &'static str,
}

const fn field(display: &'static str, storage: &'static str) -> FieldMap {
    FieldMap { display, storage }
}

/// Canonical attendance columns, in mirror header order.
const ATTENDANCE_FIELDS: &[FieldMap] = &[
    field("Nome", "nome_estagiario"),
    field("Data", "data"),
    field("Entrada", "horario_entrada"),
    field("Saída", "horario_saida"),
    field("Horas", "frequencia_horas"),
    field("Assinatura Estagiário", "assinatura_estagiario"),
    field("Assinatura Supervisor", "assinatura_supervisor"),
];

/// Canonical field-diary columns, in mirror header order.
const DIARY_FIELDS: &[FieldMap] = &[
    field("Nome", "nome_estagiario"),
    field("Data", "data"),
    field("Atividade", "atividade"),
    field("Assinatura Supervisor", "assinatura_supervisor"),
];

/// The two record collections kept by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum RecordKind {
    /// Attendance sheet (clock-in / clock-out / hours)
    Attendance,
    /// Field diary (activity log)
    Diary,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Attendance => "attendance",
            RecordKind::Diary => "diary",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Attendance => "Controle de Frequência",
            RecordKind::Diary => "Diário de Campo",
        }
    }

    pub fn fields(&self) -> &'static [FieldMap] {
        match self {
            RecordKind::Attendance => ATTENDANCE_FIELDS,
            RecordKind::Diary => DIARY_FIELDS,
        }
    }

    /// Display column names, in canonical order.
    pub fn columns(&self) -> Vec<&'static str> {
        self.fields().iter().map(|f| f.display).collect()
    }

    pub fn to_storage(&self, display: &str) -> Option<&'static str> {
        self.fields()
            .iter()
            .find(|f| f.display == display)
            .map(|f| f.storage)
    }

    pub fn to_display(&self, storage: &str) -> Option<&'static str> {
        self.fields()
            .iter()
            .find(|f| f.storage == storage)
            .map(|f| f.display)
    }
}
