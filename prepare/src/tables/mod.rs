use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};
use unicode_tables_source::PropertySet;

pub mod case;
pub mod category;
pub mod code_pages;
pub mod combining_class;
pub mod compositions;
pub mod decomposition;
pub mod relative;

use self::case::CaseMappings;
use self::category::CategoryTable;
use self::code_pages::CodePageTable;
use self::combining_class::CombiningClassTable;
use self::compositions::{CompositionTrie, Dispatch};
use self::relative::RelativeTable;
use crate::PrepareError;

/// все подготовленные таблицы. до записи ничего не пишется на диск
#[derive(Debug, Clone)]
pub struct UnicodeTables
{
    pub category: CategoryTable,
    pub combining_class: CombiningClassTable,
    pub lowercase: RelativeTable,
    pub uppercase: RelativeTable,
    pub titlecase: RelativeTable,
    pub case_folding: RelativeTable,
    pub decomposition: RelativeTable,
    /// полные канонические декомпозиции, из которых собраны таблица декомпозиции и композиции
    pub decompositions: BTreeMap<u32, Vec<u32>>,
    pub composition: Dispatch,
    /// таблицы кодовых страниц по группам (файлам вывода)
    pub code_pages: Vec<(&'static str, Vec<CodePageTable>)>,
}

impl UnicodeTables
{
    /// подготовить таблицы. таблицы кодовых страниц готовятся, если указан каталог с ними
    pub fn prepare(properties: &PropertySet, code_pages: Option<&Path>) -> Result<Self, PrepareError>
    {
        // общая страница-заглушка для всех таблиц смещений
        let identity = relative::identity_page();

        let mappings = CaseMappings::build(properties)?;
        debug!("преобразования регистра: {} кодпоинтов", mappings.lowercase.len());

        let lowercase = RelativeTable::build("lowercase", &mappings.lowercase, &identity)?;
        let uppercase = RelativeTable::build("uppercase", &mappings.uppercase, &identity)?;
        let titlecase = RelativeTable::build("titlecase", &mappings.titlecase, &identity)?;
        let case_folding = RelativeTable::build("case_folding", &properties.case_folding, &identity)?;

        let category = CategoryTable::build(properties)?;
        debug!("категории: {} строк", category.layout.rows.len());

        let combining_class = CombiningClassTable::build(properties);
        debug!("CCC: {} страниц", combining_class.pages.slots_count());

        let decompositions = decomposition::resolve(properties)?;
        let decomposition = RelativeTable::build("decomposition", &decompositions, &identity)?;

        let trie = CompositionTrie::from_decompositions(properties, &decompositions)?;
        let composition = trie.lower();

        let code_pages = match code_pages {
            Some(dir) => code_pages::load(dir)?,
            None => {
                info!("каталог кодовых страниц не указан, таблицы кодовых страниц не готовятся");
                vec![]
            }
        };

        Ok(Self {
            category,
            combining_class,
            lowercase,
            uppercase,
            titlecase,
            case_folding,
            decomposition,
            decompositions,
            composition,
            code_pages,
        })
    }

    /// таблицы смещений в порядке записи
    pub fn relative_tables(&self) -> [&RelativeTable; 5]
    {
        [
            &self.lowercase,
            &self.uppercase,
            &self.titlecase,
            &self.case_folding,
            &self.decomposition,
        ]
    }
}
