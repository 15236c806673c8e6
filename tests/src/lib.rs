//! сверка подготовленных таблиц с нормализацией ICU

#[cfg(test)]
#[macro_use]
extern crate lazy_static;

#[cfg(test)]
mod fixture;
#[cfg(test)]
mod icu;
