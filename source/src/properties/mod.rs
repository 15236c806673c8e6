mod canonical_combining_class;
mod decomposition;
mod general_category;

pub use canonical_combining_class::CanonicalCombiningClass;
pub use decomposition::Decomposition;
pub use decomposition::DecompositionTag;
pub use general_category::GeneralCategory;

/// Кодпоинт Unicode
/// источник - UCD, UnicodeData.txt
#[derive(Debug, Clone, PartialEq)]
pub struct Codepoint
{
    /// код символа
    pub code: u32,
    /// название
    pub name: String,
    /// категория символа (general category)
    pub gc: GeneralCategory,
    /// класс канонического комбинирования (canonical combining class)
    pub ccc: CanonicalCombiningClass,
    /// тег декомпозиции, None - каноническая декомпозиция
    pub decomposition_tag: Option<DecompositionTag>,
    /// декомпозиция (в том виде, в котором она записана в UCD - без раскрытия)
    pub decomposition: Vec<u32>,
    /// соответствующая прописная буква
    pub simple_uppercase_mapping: Option<u32>,
    /// соответствующая строчная буква
    pub simple_lowercase_mapping: Option<u32>,
    /// соответствующая заглавная буква
    pub simple_titlecase_mapping: Option<u32>,
}

impl Codepoint
{
    /// запись-заглушка для кодпоинта, отсутствующего в UCD
    pub fn unused(code: u32) -> Self
    {
        Self {
            code,
            name: String::new(),
            gc: GeneralCategory::Unassigned,
            ccc: CanonicalCombiningClass::NotReordered,
            decomposition_tag: None,
            decomposition: vec![],
            simple_uppercase_mapping: None,
            simple_lowercase_mapping: None,
            simple_titlecase_mapping: None,
        }
    }

    /// есть ли у кодпоинта каноническая декомпозиция
    #[inline]
    pub fn has_canonical_decomposition(&self) -> bool
    {
        self.decomposition_tag.is_none() && !self.decomposition.is_empty()
    }

    /// есть ли у кодпоинта хотя бы одно простое преобразование регистра
    #[inline]
    pub fn is_cased(&self) -> bool
    {
        self.simple_uppercase_mapping.is_some()
            || self.simple_lowercase_mapping.is_some()
            || self.simple_titlecase_mapping.is_some()
    }

    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.ccc.is_starter()
    }
}
