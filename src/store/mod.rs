//! Хранилище последних значений по адресам.
//!
//! Модуль содержит:
//!
//! - базовые типы `Address` и `Value`;
//! - `cache`: конкурентное хранилище адрес → последнее значение.

pub mod cache;

pub use cache::AddressCache;

/// Целочисленный идентификатор слота данных.
pub type Address = u32;

/// Значение, хранимое в слоте.
pub type Value = i64;

/// Значение по умолчанию: возвращается при промахе кэша и служит
/// начальным состоянием фильтра повторов.
pub const DEFAULT_VALUE: Value = 0;
