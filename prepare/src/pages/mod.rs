//! Страницы - блоки значений свойства фиксированной длины и индекс, в котором страницы
//! с одинаковым содержимым хранятся один раз.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

mod dedup;

pub use dedup::{Layout, PageIndex, Row, IDENTITY_SLOT};

/// неизменяемая страница значений. хеш вычисляется один раз при создании
#[derive(Debug, Clone)]
pub struct Page<T>
{
    values: Box<[T]>,
    hash: u64,
}

impl<T: Copy + Eq + Hash> Page<T>
{
    pub fn new(values: Vec<T>) -> Self
    {
        let mut hasher = DefaultHasher::new();
        values.hash(&mut hasher);

        Self {
            values: values.into_boxed_slice(),
            hash: hasher.finish(),
        }
    }

    /// страница, заполненная одним значением
    pub fn filled(value: T, len: usize) -> Self
    {
        Self::new(vec![value; len])
    }

    #[inline]
    pub fn values(&self) -> &[T]
    {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize
    {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool
    {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, offset: usize) -> T
    {
        self.values[offset]
    }

    /// все ли значения страницы равны указанному
    pub fn is_filled_with(&self, value: T) -> bool
    {
        self.values.iter().all(|v| *v == value)
    }
}

impl<T: Eq> PartialEq for Page<T>
{
    fn eq(&self, other: &Self) -> bool
    {
        self.hash == other.hash && self.values == other.values
    }
}

impl<T: Eq> Eq for Page<T> {}

impl<T> Hash for Page<T>
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        state.write_u64(self.hash);
    }
}
