use unicode_tables_source::properties::{Codepoint, GeneralCategory};
use unicode_tables_source::PropertySet;

use crate::pages::{Layout, Page, PageIndex, IDENTITY_SLOT};
use crate::PrepareError;

/// количество бит номера кодпоинта внутри строки таблицы категорий
pub const PAGE_BITS: u32 = 4;
/// длина строки
pub const PAGE_SIZE: usize = 1 << PAGE_BITS;
/// количество строк BMP
pub const BMP_PAGES: usize = 0x10000 >> PAGE_BITS;

/// таблица категорий символов (General Category)
///
/// данные - строки по 16 значений, самые используемые в начале. для BMP номер строки
/// берется из массива напрямую, для остальных плоскостей - двоичным поиском среди пар
/// (номер строки кодпоинтов относительно U+10000, номер строки данных)
#[derive(Debug, Clone)]
pub struct CategoryTable
{
    pub layout: Layout<GeneralCategory>,
    pub bmp: Vec<u16>,
    pub extended: Vec<(u32, u16)>,
}

impl CategoryTable
{
    pub fn build(properties: &PropertySet) -> Result<Self, PrepareError>
    {
        let unused = Codepoint::unused(0);
        let end = properties.max_code().max(0xFFFF) + 1;

        let pages = PageIndex::build(
            end,
            PAGE_BITS,
            Page::filled(GeneralCategory::Unassigned, PAGE_SIZE),
            |code| properties.get(code).unwrap_or(&unused).gc,
        );

        let layout = pages.layout();

        let bmp = layout.index[.. BMP_PAGES]
            .iter()
            .map(|&row| row_number(row))
            .collect::<Result<_, _>>()?;

        let extended = (BMP_PAGES .. layout.index.len())
            .filter(|&page| pages.slot(page as u32) != IDENTITY_SLOT)
            .map(|page| row_number(layout.index[page]).map(|row| ((page - BMP_PAGES) as u32, row)))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            layout,
            bmp,
            extended,
        })
    }

    /// категория кодпоинта так, как её найдёт код, использующий таблицу
    pub fn lookup(&self, code: u32) -> GeneralCategory
    {
        let offset = code as usize & (PAGE_SIZE - 1);
        let paragraph = code as usize >> PAGE_BITS;

        let row = match paragraph < BMP_PAGES {
            true => self.bmp[paragraph],
            false => {
                let paragraph = (paragraph - BMP_PAGES) as u32;

                match self.extended.binary_search_by_key(&paragraph, |&(p, _)| p) {
                    Ok(i) => self.extended[i].1,
                    Err(_) => return GeneralCategory::Unassigned,
                }
            }
        };

        self.layout.rows[row as usize].page.get(offset)
    }

    /// строки данных в порядке записи
    pub fn data(&self) -> Vec<u8>
    {
        self.layout
            .rows
            .iter()
            .flat_map(|row| row.page.values().iter().map(|&gc| u8::from(gc)))
            .collect()
    }
}

/// номер строки данных в 16-битном индексе
fn row_number(row: usize) -> Result<u16, PrepareError>
{
    u16::try_from(row).map_err(|_| PrepareError::RowOverflow {
        table: "category",
        row,
    })
}
