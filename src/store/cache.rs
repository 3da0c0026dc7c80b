use dashmap::DashMap;

use super::{Address, Value, DEFAULT_VALUE};

/// Кэш последних значений по адресам.
///
/// Потокобезопасное хранилище адрес → последнее записанное значение.
/// Промах кэша — это не ошибка: `get` возвращает [`DEFAULT_VALUE`],
/// если по адресу ещё ничего не записывали.
#[derive(Debug, Default)]
pub struct AddressCache {
    data: DashMap<Address, Value>,
}

impl AddressCache {
    /// Создаёт новый пустой кэш.
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }

    /// Безусловно перезаписывает значение по адресу.
    ///
    /// Запись сразу видна последующим вызовам `get` из любого потока.
    pub fn set(
        &self,
        address: Address,
        value: Value,
    ) {
        self.data.insert(address, value);
    }

    /// Возвращает последнее записанное значение по адресу.
    ///
    /// # Возвращает
    /// - последнее значение, записанное через `set`;
    /// - [`DEFAULT_VALUE`], если адрес ещё не записывался.
    pub fn get(
        &self,
        address: Address,
    ) -> Value {
        self.data
            .get(&address)
            .map(|entry| *entry)
            .unwrap_or(DEFAULT_VALUE)
    }

    /// Возвращает количество адресов, по которым есть записи.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Проверяет, пуст ли кэш.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
