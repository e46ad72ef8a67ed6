/// Every hand of four cards drawn from `1..=max_card` with repetition,
/// each listed once in non-decreasing order.
pub fn card_hands(max_card: u32) -> Vec<[u32; 4]> {
    let mut hands = Vec::new();
    for a in 1..=max_card {
        for b in a..=max_card {
            for c in b..=max_card {
                for d in c..=max_card {
                    hands.push([a, b, c, d]);
                }
            }
        }
    }
    hands
}
