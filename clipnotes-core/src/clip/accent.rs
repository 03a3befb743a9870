/// Velocity cycle built from an accent map like `"x--x"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accent {
    map: Vec<bool>,
    hi: u8,
    lo: u8,
}

impl Accent {
    /// `None` for an empty map. Callers validate the alphabet first; any
    /// character other than `x` counts as unaccented.
    pub fn new(map: &str, hi: u8, lo: u8) -> Option<Self> {
        if map.is_empty() {
            return None;
        }
        Some(Accent {
            map: map.chars().map(|c| c == 'x').collect(),
            hi,
            lo,
        })
    }

    /// Velocity for the `index`-th note event
    pub fn velocity(&self, index: usize) -> u8 {
        if self.map[index % self.map.len()] {
            self.hi
        } else {
            self.lo
        }
    }
}
