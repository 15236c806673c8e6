use std::collections::{BTreeMap, BTreeSet};

use unicode_tables_source::PropertySet;

use crate::PrepareError;

/// преобразования регистра для таблиц lowercase, uppercase, titlecase
#[derive(Debug, Clone, Default)]
pub struct CaseMappings
{
    pub lowercase: BTreeMap<u32, Vec<u32>>,
    pub uppercase: BTreeMap<u32, Vec<u32>>,
    pub titlecase: BTreeMap<u32, Vec<u32>>,
}

impl CaseMappings
{
    /// кодпоинты, имеющие простое преобразование регистра в UnicodeData.txt, и кодпоинты
    /// из безусловных записей SpecialCasing.txt. для последних преобразования берутся из
    /// SpecialCasing.txt, для остальных - простое преобразование или сам кодпоинт
    pub fn build(properties: &PropertySet) -> Result<Self, PrepareError>
    {
        let mut cased: BTreeSet<u32> = properties
            .unicode
            .values()
            .filter(|codepoint| codepoint.is_cased())
            .map(|codepoint| codepoint.code)
            .collect();

        for &code in properties.special_casing.keys() {
            if properties.get(code).is_none() {
                return Err(PrepareError::MissingRecord {
                    code,
                    context: "SpecialCasing.txt".to_owned(),
                });
            }
            cased.insert(code);
        }

        let mut mappings = Self::default();

        for code in cased {
            if let Some(special) = properties.special_casing.get(&code) {
                mappings.lowercase.insert(code, special.lowercase.clone());
                mappings.uppercase.insert(code, special.uppercase.clone());
                mappings.titlecase.insert(code, special.titlecase.clone());
                continue;
            }

            let codepoint = match properties.get(code) {
                Some(codepoint) => codepoint,
                None => continue,
            };

            let lowercase = codepoint.simple_lowercase_mapping.unwrap_or(code);
            let uppercase = codepoint.simple_uppercase_mapping.unwrap_or(code);
            let titlecase = codepoint.simple_titlecase_mapping.unwrap_or(code);

            mappings.lowercase.insert(code, vec![lowercase]);
            mappings.uppercase.insert(code, vec![uppercase]);
            mappings.titlecase.insert(code, vec![titlecase]);
        }

        Ok(mappings)
    }
}
