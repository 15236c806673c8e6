use crate::SourceError;

/// основная категория символа (General Category, GC)
/// берется из UCD: вторая колонка UnicodeData.txt, в таблицу пишется значение u8
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[repr(u8)]
pub enum GeneralCategory
{
    /// Cn - место под символ зарезервировано или не назначено, или же элемент не является символом.
    /// дефолтный вариант при отсутствии записи о символе в UCD
    #[default]
    Unassigned = 0, // 0b_0000_0000

    /// Lu - прописная буква
    UppercaseLetter = 1, // 0b_0000_0001
    /// Ll - строчная буква
    LowercaseLetter = 2, // 0b_0000_0010
    /// Lt - диграфический символ, первая часть - заглавная буква
    TitlecaseLetter = 3, // 0b_0000_0011

    /// Lm - буква-модификатор
    ModifierLetter = 4, // 0b_0000_0100
    /// Lo - прочие буквы, включая слоги и иероглифы
    OtherLetter = 5, // 0b_0000_0101

    /// Mn - неразрывный комбинирующий маркер (не занимающий пространства)
    NonspacingMark = 6, // 0b_0000_0110
    /// Mc - комбинирующий маркер, занимающий пространство
    SpacingMark = 7, // 0b_0000_0111
    /// Me - охватывающий комбинирующий маркер
    EnclosingMark = 8, // 0b_0000_1000

    /// Nd - десятичная цифра
    DecimalNumber = 9, // 0b_0000_1001
    /// Nl - буквоподобный числовой символ
    LetterNumber = 10, // 0b_0000_1010
    /// No - прочие числовые символы
    OtherNumber = 11, // 0b_0000_1011

    /// Zs - разделитель-пробел
    SpaceSeparator = 12, // 0b_0000_1100
    /// Zl - разделитель строки
    LineSeparator = 13, // 0b_0000_1101
    /// Zp - разделитель параграфов
    ParagraphSeparator = 14, // 0b_0000_1110

    /// Cc - управляющий символ, относится к C0 или C1
    Control = 16, // 0b_0001_0000
    /// Cf - управляющий символ форматирования
    Format = 17, // 0b_0001_0001
    /// Cs - символ-суррогат
    Surrogate = 18, // 0b_0001_0010
    /// Co - символ для приватного использования
    PrivateUse = 19, // 0b_0001_0011

    /// Pc - объединяющяя пунктуация, например _
    ConnectorPunctuation = 20, // 0b_0001_0100
    /// Pd - тире или дефис как знак препинания
    DashPunctuation = 21, // 0b_0001_0101
    /// Ps - открывающий знак пунктуации (из пары)
    OpenPunctuation = 22, // 0b_0001_0110
    /// Pe - закрывающий знак пунктуации (из пары)
    ClosePunctuation = 23, // 0b_0001_0111
    /// Pi - начальный знак цитаты
    InitialPunctuation = 24, // 0b_0001_1000
    /// Pf - конечный знак цитаты
    FinalPunctuation = 25, // 0b_0001_1001
    /// Po - знак препинания другого типа
    OtherPunctuation = 26, // 0b_0001_1010

    /// Sm - математический символ
    MathSymbol = 28, // 0b_0001_1100
    /// Sc - символ валюты
    CurrencySymbol = 29, // 0b_0001_1101
    /// Sk - символ модификатора, не похожий на букву
    ModifierSymbol = 30, // 0b_0001_1110
    /// So - прочие символы
    OtherSymbol = 31, // 0b_0001_1111
}

impl GeneralCategory
{
    /// категория не назначена (Cn)
    #[inline]
    pub fn is_unassigned(&self) -> bool
    {
        u8::from(*self) == 0
    }
}

impl GeneralCategory
{
    /// все варианты, в порядке возрастания числового значения
    pub const ALL: [Self; 30] = [
        Self::Unassigned,
        Self::UppercaseLetter,
        Self::LowercaseLetter,
        Self::TitlecaseLetter,
        Self::ModifierLetter,
        Self::OtherLetter,
        Self::NonspacingMark,
        Self::SpacingMark,
        Self::EnclosingMark,
        Self::DecimalNumber,
        Self::LetterNumber,
        Self::OtherNumber,
        Self::SpaceSeparator,
        Self::LineSeparator,
        Self::ParagraphSeparator,
        Self::Control,
        Self::Format,
        Self::Surrogate,
        Self::PrivateUse,
        Self::ConnectorPunctuation,
        Self::DashPunctuation,
        Self::OpenPunctuation,
        Self::ClosePunctuation,
        Self::InitialPunctuation,
        Self::FinalPunctuation,
        Self::OtherPunctuation,
        Self::MathSymbol,
        Self::CurrencySymbol,
        Self::ModifierSymbol,
        Self::OtherSymbol,
    ];

    /// сокращенное название категории, как в UCD
    pub fn abbr(&self) -> &'static str
    {
        match self {
            Self::Unassigned => "Cn",
            Self::UppercaseLetter => "Lu",
            Self::LowercaseLetter => "Ll",
            Self::TitlecaseLetter => "Lt",
            Self::ModifierLetter => "Lm",
            Self::OtherLetter => "Lo",
            Self::NonspacingMark => "Mn",
            Self::SpacingMark => "Mc",
            Self::EnclosingMark => "Me",
            Self::DecimalNumber => "Nd",
            Self::LetterNumber => "Nl",
            Self::OtherNumber => "No",
            Self::SpaceSeparator => "Zs",
            Self::LineSeparator => "Zl",
            Self::ParagraphSeparator => "Zp",
            Self::Control => "Cc",
            Self::Format => "Cf",
            Self::Surrogate => "Cs",
            Self::PrivateUse => "Co",
            Self::ConnectorPunctuation => "Pc",
            Self::DashPunctuation => "Pd",
            Self::OpenPunctuation => "Ps",
            Self::ClosePunctuation => "Pe",
            Self::InitialPunctuation => "Pi",
            Self::FinalPunctuation => "Pf",
            Self::OtherPunctuation => "Po",
            Self::MathSymbol => "Sm",
            Self::CurrencySymbol => "Sc",
            Self::ModifierSymbol => "Sk",
            Self::OtherSymbol => "So",
        }
    }
}

impl TryFrom<&str> for GeneralCategory
{
    type Error = SourceError;

    #[inline]
    fn try_from(abbr: &str) -> Result<Self, Self::Error>
    {
        match Self::ALL.iter().find(|gc| gc.abbr() == abbr) {
            Some(gc) => Ok(*gc),
            None if abbr.is_empty() => Ok(Self::Unassigned),
            None => Err(SourceError::UnknownPropertyValue(abbr.to_owned())),
        }
    }
}

impl From<GeneralCategory> for u8
{
    #[inline]
    fn from(value: GeneralCategory) -> Self
    {
        value as u8
    }
}

impl core::fmt::Display for GeneralCategory
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{}", self.abbr())
    }
}
