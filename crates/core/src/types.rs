/// Product identifiers are assigned by the store API.
pub type ProductId = i64;

/// Category names are free text; the store API does not enforce them.
pub type CategoryName = String;
