/// Hands out parameter keys `p1`, `p2`, ... for one compilation.
///
/// The counter starts after the bindings a sink already holds, so filters
/// applied one after another to the same sink never reuse a key.
#[derive(Debug, Clone)]
pub struct ParamKeys {
    issued: usize,
}

impl ParamKeys {
    pub fn starting_after(existing: usize) -> Self {
        Self { issued: existing }
    }

    pub fn next_key(&mut self) -> String {
        self.issued += 1;
        format!("p{}", self.issued)
    }
}

impl Default for ParamKeys {
    fn default() -> Self {
        Self::starting_after(0)
    }
}
