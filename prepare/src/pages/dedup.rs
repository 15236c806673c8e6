use std::collections::HashMap;
use std::hash::Hash;

use super::Page;

/// слот страницы-заглушки (identity): на него ссылаются все страницы, не попавшие в индекс
pub const IDENTITY_SLOT: usize = 0;

/// хранилище страниц с адресацией по содержимому
///
/// каждое уникальное содержимое получает ровно один слот, номер страницы кодпоинтов
/// отображается в слот. слот 0 всегда занят страницей-заглушкой
#[derive(Debug, Clone)]
pub struct PageIndex<T>
{
    page_bits: u32,
    slots: Vec<Slot<T>>,
    slot_by_page: HashMap<Page<T>, usize>,
    index: Vec<usize>,
}

#[derive(Debug, Clone)]
struct Slot<T>
{
    page: Page<T>,
    /// номер первой страницы кодпоинтов с таким содержимым
    first_page: Option<u32>,
}

/// строка таблицы в порядке записи
#[derive(Debug, Clone)]
pub struct Row<T>
{
    pub slot: usize,
    pub first_page: Option<u32>,
    /// количество страниц индекса, ссылающихся на строку
    pub usage: usize,
    pub page: Page<T>,
}

/// строки, упорядоченные по частоте использования, и индекс "номер страницы -> номер строки"
#[derive(Debug, Clone)]
pub struct Layout<T>
{
    pub rows: Vec<Row<T>>,
    pub index: Vec<usize>,
}

impl<T: Copy + Eq + Hash> PageIndex<T>
{
    /// пустой индекс со страницей-заглушкой в слоте 0
    pub fn new(page_bits: u32, identity: Page<T>) -> Self
    {
        assert_eq!(identity.len(), 1 << page_bits);

        let mut slot_by_page = HashMap::new();
        slot_by_page.insert(identity.clone(), IDENTITY_SLOT);

        Self {
            page_bits,
            slots: vec![Slot {
                page: identity,
                first_page: None,
            }],
            slot_by_page,
            index: vec![],
        }
    }

    /// один линейный проход по кодпоинтам 0 .. end (с округлением до целой страницы)
    pub fn build(end: u32, page_bits: u32, identity: Page<T>, mut value_fn: impl FnMut(u32) -> T) -> Self
    {
        let mut pages = Self::new(page_bits, identity);
        let page_size = 1u32 << page_bits;
        let pages_count = (end + page_size - 1) >> page_bits;

        for page_number in 0 .. pages_count {
            let first = page_number << page_bits;
            let values = (first .. first + page_size).map(&mut value_fn).collect();

            pages.insert(page_number, Page::new(values));
        }

        pages
    }

    /// добавить страницу кодпоинтов, вернуть слот, в котором хранится её содержимое
    pub fn insert(&mut self, page_number: u32, page: Page<T>) -> usize
    {
        assert_eq!(page.len(), self.page_size());

        let slot = match self.slot_by_page.get(&page) {
            Some(&slot) => slot,
            None => {
                let slot = self.slots.len();

                self.slot_by_page.insert(page.clone(), slot);
                self.slots.push(Slot {
                    page,
                    first_page: Some(page_number),
                });

                slot
            }
        };

        if self.slots[slot].first_page.is_none() {
            self.slots[slot].first_page = Some(page_number);
        }

        let position = page_number as usize;

        if position >= self.index.len() {
            self.index.resize(position + 1, IDENTITY_SLOT);
        }
        self.index[position] = slot;

        slot
    }

    /// дополнить индекс ссылками на заглушку до указанной длины
    pub fn pad_to(&mut self, len: usize)
    {
        if len > self.index.len() {
            self.index.resize(len, IDENTITY_SLOT);
        }
    }

    /// слот страницы кодпоинтов, за пределами индекса - заглушка
    #[inline]
    pub fn slot(&self, page_number: u32) -> usize
    {
        self.index.get(page_number as usize).copied().unwrap_or(IDENTITY_SLOT)
    }

    /// значение для кодпоинта
    #[inline]
    pub fn get(&self, code: u32) -> T
    {
        let slot = self.slot(code >> self.page_bits);
        let offset = code & ((1 << self.page_bits) - 1);

        self.slots[slot].page.get(offset as usize)
    }

    #[inline]
    pub fn page(&self, slot: usize) -> &Page<T>
    {
        &self.slots[slot].page
    }

    #[inline]
    pub fn first_page(&self, slot: usize) -> Option<u32>
    {
        self.slots[slot].first_page
    }

    /// индекс "номер страницы -> слот"
    #[inline]
    pub fn index(&self) -> &[usize]
    {
        &self.index
    }

    #[inline]
    pub fn slots_count(&self) -> usize
    {
        self.slots.len()
    }

    #[inline]
    pub fn page_bits(&self) -> u32
    {
        self.page_bits
    }

    #[inline]
    pub fn page_size(&self) -> usize
    {
        1 << self.page_bits
    }

    /// сколько страниц индекса ссылается на каждый слот
    pub fn usages(&self) -> Vec<usize>
    {
        let mut usages = vec![0; self.slots.len()];

        for &slot in self.index.iter() {
            usages[slot] += 1;
        }

        usages
    }

    /// порядок записи: чаще используемые строки - в начале таблицы,
    /// при равной частоте - в порядке появления
    pub fn layout(&self) -> Layout<T>
    {
        let usages = self.usages();

        let mut order: Vec<usize> = (0 .. self.slots.len()).collect();
        order.sort_by(|a, b| usages[*b].cmp(&usages[*a]).then(a.cmp(b)));

        let mut row_by_slot = vec![0; self.slots.len()];

        for (row, &slot) in order.iter().enumerate() {
            row_by_slot[slot] = row;
        }

        let rows = order
            .iter()
            .map(|&slot| Row {
                slot,
                first_page: self.slots[slot].first_page,
                usage: usages[slot],
                page: self.slots[slot].page.clone(),
            })
            .collect();

        let index = self.index.iter().map(|&slot| row_by_slot[slot]).collect();

        Layout { rows, index }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn page(values: &[u8]) -> Page<u8>
    {
        Page::new(values.to_vec())
    }

    #[test]
    fn identical_pages_share_slot()
    {
        let mut index = PageIndex::new(2, page(&[0, 0, 0, 0]));

        let a = index.insert(0, page(&[1, 2, 3, 4]));
        let b = index.insert(5, page(&[1, 2, 3, 4]));
        let c = index.insert(7, page(&[4, 3, 2, 1]));
        let zero = index.insert(8, page(&[0, 0, 0, 0]));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(zero, IDENTITY_SLOT);
        assert_eq!(index.slots_count(), 3);

        // первый номер страницы остаётся за слотом
        assert_eq!(index.first_page(a), Some(0));
        assert_eq!(index.first_page(IDENTITY_SLOT), Some(8));

        // пропущенные страницы ссылаются на заглушку
        assert_eq!(index.index(), &[a, 0, 0, 0, 0, a, 0, c, 0]);
    }

    #[test]
    fn values_through_index()
    {
        let mut index = PageIndex::new(2, page(&[9, 9, 9, 9]));
        index.insert(1, page(&[1, 2, 3, 4]));

        assert_eq!(index.get(0), 9);
        assert_eq!(index.get(4), 1);
        assert_eq!(index.get(7), 4);
        assert_eq!(index.get(1000), 9);
    }

    #[test]
    fn build_in_one_pass()
    {
        let index = PageIndex::build(10, 2, page(&[0, 0, 0, 0]), |code| match code {
            4 ..= 7 => 1,
            _ => 0,
        });

        // 10 кодпоинтов - 3 страницы
        assert_eq!(index.index().len(), 3);
        assert_eq!(index.slot(0), IDENTITY_SLOT);
        assert_eq!(index.slot(2), IDENTITY_SLOT);
        assert_ne!(index.slot(1), IDENTITY_SLOT);
    }

    #[test]
    fn layout_by_usage()
    {
        let mut index = PageIndex::new(1, page(&[0, 0]));

        let rare = index.insert(0, page(&[1, 1]));
        let frequent = index.insert(1, page(&[2, 2]));
        index.insert(2, page(&[2, 2]));
        index.insert(3, page(&[0, 0]));
        index.pad_to(6);

        let layout = index.layout();
        let slots: Vec<usize> = layout.rows.iter().map(|row| row.slot).collect();
        let usages: Vec<usize> = layout.rows.iter().map(|row| row.usage).collect();

        // заглушка: страница 3 + две страницы дополнения
        assert_eq!(slots, vec![IDENTITY_SLOT, frequent, rare]);
        assert_eq!(usages, vec![3, 2, 1]);
        assert_eq!(layout.index, vec![2, 1, 1, 0, 0, 0]);
    }
}
