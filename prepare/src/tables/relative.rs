//! Таблицы преобразований "кодпоинт -> последовательность кодпоинтов" со смещениями
//! относительно самого кодпоинта.
//!
//! значение в основной таблице:
//!     0 - преобразования нет (или кодпоинт отображается сам в себя)
//!     -code - результат содержит несколько кодпоинтов, см. расширенную таблицу
//!     иначе - смещение единственного результата относительно кодпоинта
//!
//! страница расширенной таблицы для каждого кодпоинта содержит позицию записи
//! `длина, кодпоинт, кодпоинт, ...` в общем массиве расширенных значений

use std::collections::BTreeMap;

use tracing::debug;

use crate::pages::{Page, PageIndex, IDENTITY_SLOT};
use crate::PrepareError;

pub const PAGE_BITS: u32 = 8;
pub const PAGE_SIZE: usize = 1 << PAGE_BITS;
/// длина индексов кратна этому значению
pub const INDEX_ALIGNMENT: usize = 8;

/// какая страница нужна для диапазона кодпоинтов
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PageKind
{
    /// все значения - заглушки, страница не записывается
    None,
    /// только смещения
    SingleValue,
    /// смещения и указатели на расширенную таблицу
    Extended,
}

/// результат преобразования, прочитанный из таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapped<'a>
{
    Identity,
    Single(u32),
    Multiple(&'a [u32]),
}

/// страница-заглушка для таблиц смещений (256 нулей)
pub fn identity_page() -> Page<i32>
{
    Page::filled(0, PAGE_SIZE)
}

/// подготовленная таблица смещений
#[derive(Debug, Clone)]
pub struct RelativeTable
{
    pub name: &'static str,
    /// страницы смещений и основной индекс
    pub deltas: PageIndex<i32>,
    /// индекс страниц расширенной таблицы: позиции записей в `extended`
    pub auxiliary: Vec<Option<Vec<Option<u32>>>>,
    /// записи вида `длина, кодпоинт, ...`
    pub extended: Vec<u32>,
}

impl RelativeTable
{
    pub fn build(
        name: &'static str,
        mappings: &BTreeMap<u32, Vec<u32>>,
        identity: &Page<i32>,
    ) -> Result<Self, PrepareError>
    {
        let mut kinds: BTreeMap<u32, PageKind> = BTreeMap::new();

        // нулевая страница записывается всегда
        kinds.insert(0, PageKind::Extended);

        for (&code, values) in mappings.iter() {
            let kind = page_kind(code, values);

            if kind == PageKind::None {
                continue;
            }

            let entry = kinds.entry(code >> PAGE_BITS).or_insert(PageKind::None);
            *entry = (*entry).max(kind);
        }

        let mut deltas = PageIndex::new(PAGE_BITS, identity.clone());
        let mut auxiliary: Vec<Option<Vec<Option<u32>>>> = vec![];
        let mut extended = vec![];

        let mut last_page = 0;
        let mut last_extended_page = 0;

        for (&page, &kind) in kinds.iter() {
            let first = page << PAGE_BITS;

            let mut values = vec![0i32; PAGE_SIZE];
            let mut pointers = vec![None; PAGE_SIZE];

            for (offset, code) in (first .. first + PAGE_SIZE as u32).enumerate() {
                let mapping = match mappings.get(&code) {
                    Some(mapping) => mapping.as_slice(),
                    None => &[],
                };

                // U+0000 в расширенной таблице всегда отображается сам в себя
                if code == 0 && kind == PageKind::Extended && page_kind(code, mapping) == PageKind::None {
                    pointers[offset] = Some(push_record(&mut extended, &[0]));
                }

                match mapping.len() {
                    0 => (),
                    1 => {
                        if mapping[0] == 0 && code != 0 {
                            return Err(PrepareError::SentinelCollision { code, table: name });
                        }
                        values[offset] = mapping[0] as i32 - code as i32;
                    }
                    _ => {
                        if code == 0 {
                            return Err(PrepareError::SentinelCollision { code, table: name });
                        }
                        values[offset] = -(code as i32);
                        pointers[offset] = Some(push_record(&mut extended, mapping));
                    }
                }
            }

            if kind == PageKind::Extended {
                if auxiliary.len() <= page as usize {
                    auxiliary.resize(page as usize + 1, None);
                }
                auxiliary[page as usize] = Some(pointers);
                last_extended_page = page;
            }

            deltas.insert(page, Page::new(values));
            last_page = page;
        }

        deltas.pad_to(aligned(last_page as usize + 1));
        auxiliary.resize(aligned(last_extended_page as usize + 1), None);

        debug!(
            "{}: страниц {}, уникальных {}, расширенных значений {}",
            name,
            deltas.index().len(),
            deltas.slots_count(),
            extended.len()
        );

        Ok(Self {
            name,
            deltas,
            auxiliary,
            extended,
        })
    }

    /// преобразование кодпоинта так, как его прочитает код, использующий таблицу
    pub fn lookup(&self, code: u32) -> Mapped
    {
        let delta = self.deltas.get(code);

        if delta == 0 {
            return Mapped::Identity;
        }

        if delta != -(code as i32) {
            return Mapped::Single((code as i64 + delta as i64) as u32);
        }

        let page = (code >> PAGE_BITS) as usize;
        let offset = code as usize & (PAGE_SIZE - 1);

        let pointer = self
            .auxiliary
            .get(page)
            .and_then(|pointers| pointers.as_ref())
            .and_then(|pointers| pointers[offset]);

        match pointer {
            Some(pointer) => {
                let start = pointer as usize + 1;
                let len = self.extended[pointer as usize] as usize;

                Mapped::Multiple(&self.extended[start .. start + len])
            }
            None => Mapped::Identity,
        }
    }

    /// вид страницы кодпоинтов
    pub fn page_kind(&self, page: u32) -> PageKind
    {
        let has_pointers = matches!(self.auxiliary.get(page as usize), Some(Some(_)));

        match has_pointers {
            true => PageKind::Extended,
            false => match self.deltas.slot(page) == IDENTITY_SLOT {
                true => PageKind::None,
                false => PageKind::SingleValue,
            },
        }
    }
}

/// какая страница нужна кодпоинту с данным преобразованием
fn page_kind(code: u32, values: &[u32]) -> PageKind
{
    match values.len() {
        0 => PageKind::None,
        1 => match values[0] == code {
            true => PageKind::None,
            false => PageKind::SingleValue,
        },
        _ => PageKind::Extended,
    }
}

/// добавить запись в расширенную таблицу, вернуть её позицию
fn push_record(extended: &mut Vec<u32>, values: &[u32]) -> u32
{
    let position = extended.len() as u32;

    extended.push(values.len() as u32);
    extended.extend_from_slice(values);

    position
}

#[inline]
fn aligned(len: usize) -> usize
{
    (len + INDEX_ALIGNMENT - 1) / INDEX_ALIGNMENT * INDEX_ALIGNMENT
}
