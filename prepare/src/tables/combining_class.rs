use unicode_tables_source::PropertySet;

use crate::pages::{Page, PageIndex, IDENTITY_SLOT};

pub const PAGE_BITS: u32 = 8;
pub const PAGE_SIZE: usize = 1 << PAGE_BITS;

/// таблица классов канонического комбинирования: страницы по 256 значений,
/// одинаковые страницы хранятся один раз
#[derive(Debug, Clone)]
pub struct CombiningClassTable
{
    pub pages: PageIndex<u8>,
}

impl CombiningClassTable
{
    pub fn build(properties: &PropertySet) -> Self
    {
        let end = properties.max_code().max(0xFFFF) + 1;

        let pages = PageIndex::build(end, PAGE_BITS, Page::filled(0, PAGE_SIZE), |code| {
            properties.ccc(code).u8()
        });

        Self { pages }
    }

    #[inline]
    pub fn lookup(&self, code: u32) -> u8
    {
        self.pages.get(code)
    }

    /// имя страницы: по первому кодпоинту страницы, на которой встретилось её содержимое.
    /// страница из нулей называется `_combining_identity`, даже если на неё никто не ссылается
    pub fn page_name(&self, slot: usize) -> String
    {
        match (slot == IDENTITY_SLOT, self.pages.first_page(slot)) {
            (true, _) | (false, None) => "_combining_identity".to_owned(),
            (false, Some(page)) => format!("_combining_{:04X}", page << PAGE_BITS),
        }
    }

    /// имена страниц для каждой страницы кодпоинтов
    pub fn lookup_names(&self) -> Vec<String>
    {
        self.pages.index().iter().map(|&slot| self.page_name(slot)).collect()
    }
}
