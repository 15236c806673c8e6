//! Свойства символов Unicode, необходимые для построения таблиц: разбор файлов UCD
//! (UnicodeData.txt, CaseFolding.txt, SpecialCasing.txt) и таблиц кодовых страниц.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub mod properties;

mod case_folding;
mod code_page;
mod error;
mod lines;
mod special_casing;
mod unicode;

pub use error::SourceError;

pub use case_folding::full_case_folding;
pub use case_folding::parse_case_folding;
pub use case_folding::CaseFolding;
pub use case_folding::CaseFoldingStatus;

pub use special_casing::parse_special_casing;
pub use special_casing::SpecialCasing;

pub use code_page::parse_code_page;
pub use code_page::CodePageMapping;

pub use unicode::parse_unicode_data;

use properties::{CanonicalCombiningClass, Codepoint};

/// набор свойств символов: только для чтения после разбора
#[derive(Debug, Clone)]
pub struct PropertySet
{
    /// записи UnicodeData.txt
    pub unicode: BTreeMap<u32, Codepoint>,
    /// свертка регистра (записи C + F из CaseFolding.txt)
    pub case_folding: BTreeMap<u32, Vec<u32>>,
    /// безусловные записи SpecialCasing.txt
    pub special_casing: BTreeMap<u32, SpecialCasing>,
}

impl PropertySet
{
    /// собрать набор свойств из содержимого файлов UCD
    pub fn parse(
        unicode_data: &str,
        case_folding: &str,
        special_casing: &str,
    ) -> Result<Self, SourceError>
    {
        let unicode = parse_unicode_data(unicode_data)?;
        let case_folding = full_case_folding(&parse_case_folding(case_folding)?)?;

        let special_casing = parse_special_casing(special_casing)?
            .into_iter()
            .filter(|entry| entry.is_unconditional())
            .map(|entry| (entry.code, entry))
            .collect();

        Ok(Self {
            unicode,
            case_folding,
            special_casing,
        })
    }

    /// прочитать файлы UCD из каталога
    pub fn load(dir: &Path) -> Result<Self, SourceError>
    {
        let unicode_data = read(&dir.join("UnicodeData.txt"))?;
        let case_folding = read(&dir.join("CaseFolding.txt"))?;
        let special_casing = read(&dir.join("SpecialCasing.txt"))?;

        Self::parse(&unicode_data, &case_folding, &special_casing)
    }

    #[inline]
    pub fn get(&self, code: u32) -> Option<&Codepoint>
    {
        self.unicode.get(&code)
    }

    /// CCC кодпоинта, для отсутствующих в UCD - 0
    #[inline]
    pub fn ccc(&self, code: u32) -> CanonicalCombiningClass
    {
        match self.unicode.get(&code) {
            Some(codepoint) => codepoint.ccc,
            None => CanonicalCombiningClass::NotReordered,
        }
    }

    /// последний кодпоинт, описанный в UCD
    pub fn max_code(&self) -> u32
    {
        self.unicode.keys().next_back().copied().unwrap_or(0)
    }
}

/// прочитать файл данных
pub fn read(path: &Path) -> Result<String, SourceError>
{
    fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_owned(),
        source,
    })
}
