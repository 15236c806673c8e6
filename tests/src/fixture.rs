use std::path::Path;

use unicode_tables_prepare::tables::UnicodeTables;
use unicode_tables_source::PropertySet;

lazy_static! {
    pub static ref PROPERTIES: PropertySet = PropertySet::load(Path::new("./../source/data/test")).unwrap();
    pub static ref TABLES: UnicodeTables = UnicodeTables::prepare(&PROPERTIES, None).unwrap();
}

/// строка из кодпоинтов
pub fn to_string(codes: &[u32]) -> String
{
    codes.iter().map(|&code| char::from_u32(code).unwrap()).collect()
}

/// кодпоинты строки
pub fn to_codes(s: &str) -> Vec<u32>
{
    s.chars().map(u32::from).collect()
}
