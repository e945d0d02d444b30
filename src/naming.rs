//! Generated box names.

/// Name for the box at `index`: "Box A" to "Box Z", then "Box AA", "Box AB"
/// and so on.
pub fn generate_box_name(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.reverse();
    format!("Box {}", letters.into_iter().collect::<String>())
}
