//! Messages shown under invalid form fields. Returned verbatim.

pub const REQUIRED_FIELD: &str = "*Este campo é obrigatório";

pub const MIN_LENGTH_3: &str = "*Este campo precisa de no mínimo 3 caracteres";

pub const INVALID_EMAIL: &str = "*Este campo deve ser um e-mail válido";
