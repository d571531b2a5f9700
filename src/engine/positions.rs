use crate::domain::PlayerId;

/// Первый id из `order`, удовлетворяющий `pred`, при циклическом обходе
/// начиная с `start` (включительно).
pub fn first_matching_from(
    order: &[PlayerId],
    start: usize,
    pred: impl Fn(PlayerId) -> bool,
) -> Option<PlayerId> {
    let len = order.len();
    if len == 0 {
        return None;
    }
    (0..len)
        .map(|step| order[(start + step) % len])
        .find(|&id| pred(id))
}

/// Id после `current` в `order` по кругу, без самого `current`.
pub fn seats_after(order: &[PlayerId], current: PlayerId) -> Vec<PlayerId> {
    let len = order.len();
    let pos = match order.iter().position(|&id| id == current) {
        Some(pos) => pos,
        None => return Vec::new(),
    };
    (1..len).map(|step| order[(pos + step) % len]).collect()
}

/// Первый игрок фазы торговли.
///
/// Фазу 0 открывает голова очереди. Следующие фазы открывает первое место
/// из `active`, найденное обходом с места после головы.
pub fn first_actor(order: &[PlayerId], active: &[PlayerId], phase: u32) -> Option<PlayerId> {
    let start = if phase == 0 { 0 } else { 1 };
    first_matching_from(order, start, |id| active.contains(&id))
}
