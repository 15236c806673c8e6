//! общие данные бенчмарков

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use unicode_tables_prepare::tables::UnicodeTables;
use unicode_tables_source::PropertySet;

pub const WARM_UP_TIME: u64 = 3;
pub const MEASUREMENT_TIME: u64 = 7;

/// каталог с файлами UCD: полные данные, если они подготовлены, иначе тестовые
pub fn ucd_dir() -> &'static Path
{
    match Path::new("./../data/ucd/UnicodeData.txt").exists() {
        true => Path::new("./../data/ucd"),
        false => Path::new("./../source/data/test"),
    }
}

lazy_static! {
    pub static ref PROPERTIES: PropertySet = match PropertySet::load(ucd_dir()) {
        Ok(properties) => properties,
        Err(e) => panic!("{}", e),
    };
    pub static ref TABLES: UnicodeTables = match UnicodeTables::prepare(&PROPERTIES, None) {
        Ok(tables) => tables,
        Err(e) => panic!("{}", e),
    };
}
