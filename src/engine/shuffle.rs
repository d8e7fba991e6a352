use crate::engine::RandomSource;

/// Тасование Фишера–Йетса на месте.
///
/// Для i от n-1 до 1: j = случайный индекс из [0, i], swap(i, j).
/// Пустой срез и срез из одного элемента не меняются.
pub fn fisher_yates<T>(slice: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..slice.len()).rev() {
        let j = rng.index_up_to(i);
        slice.swap(i, j);
    }
}
