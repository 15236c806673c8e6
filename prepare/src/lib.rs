//! Подготовка компактных таблиц Unicode: страницы с одинаковым содержимым хранятся
//! один раз, преобразования кодпоинтов записываются смещениями, композиция - процедурой
//! выбора по дереву последовательностей.

pub mod error;
pub mod output;
pub mod pages;
pub mod tables;

pub use error::PrepareError;
