use crate::SourceError;

/// класс канонического комбинирования (CCC), четвертая колонка UnicodeData.txt.
/// упорядочивание по значению - порядок канонической перестановки
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CanonicalCombiningClass(u8);

#[allow(non_upper_case_globals)]
impl CanonicalCombiningClass
{
    pub const NotReordered: Self = Self(0);
    pub const AttachedBelow: Self = Self(202);
    pub const AttachedAboveRight: Self = Self(216);
    pub const Below: Self = Self(220);
    pub const Above: Self = Self(230);
    pub const IotaSubscript: Self = Self(240);

    /// стартер - кодпоинт с CCC = 0
    #[inline]
    pub fn is_starter(&self) -> bool
    {
        self.0 == 0
    }

    /// значение для записи в таблицу
    #[inline]
    pub fn u8(&self) -> u8
    {
        self.0
    }
}

impl From<u8> for CanonicalCombiningClass
{
    #[inline]
    fn from(value: u8) -> Self
    {
        Self(value)
    }
}

impl TryFrom<&str> for CanonicalCombiningClass
{
    type Error = SourceError;

    /// пустое значение - 0
    fn try_from(value: &str) -> Result<Self, Self::Error>
    {
        match value.trim() {
            "" => Ok(Self::NotReordered),
            value => value
                .parse::<u8>()
                .map(Self)
                .map_err(|_| SourceError::UnknownPropertyValue(value.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn parse()
    {
        assert_eq!(CanonicalCombiningClass::try_from("").unwrap(), CanonicalCombiningClass::NotReordered);
        assert_eq!(CanonicalCombiningClass::try_from("230").unwrap(), CanonicalCombiningClass::Above);
        assert_eq!(CanonicalCombiningClass::try_from("7").unwrap().u8(), 7);

        assert!(matches!(
            CanonicalCombiningClass::try_from("256"),
            Err(SourceError::UnknownPropertyValue(value)) if value == "256"
        ));
        assert!(CanonicalCombiningClass::try_from("Above").is_err());
    }

    #[test]
    fn ordering()
    {
        assert!(CanonicalCombiningClass::NotReordered.is_starter());
        assert!(!CanonicalCombiningClass::Below.is_starter());
        assert!(CanonicalCombiningClass::Below < CanonicalCombiningClass::Above);
        assert!(CanonicalCombiningClass::AttachedBelow < CanonicalCombiningClass::IotaSubscript);
        assert_eq!(CanonicalCombiningClass::from(216), CanonicalCombiningClass::AttachedAboveRight);
    }
}
