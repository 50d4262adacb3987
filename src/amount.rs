use std::fmt;

/// Fixed-point decimal with 4 decimal places, stored as a scaled integer.
///
/// Arithmetic stays exact at 4 places; `Display` rounds half away from zero
/// to 2 places, which is what bills show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 10_000;
    const CENT: i64 = Self::SCALE / 100;

    pub const ZERO: Amount = Amount(0);

    pub fn from_units(value: i64) -> Self {
        Amount(value * Self::SCALE)
    }

    pub fn from_scaled(value: i64) -> Self {
        Amount(value)
    }

    /// `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Amount)
    }

    /// `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(quantity)).map(Amount)
    }

    /// The value rounded to whole cents, still in scaled form.
    pub fn round_to_cents(self) -> Self {
        let half = Self::CENT / 2;
        let abs = self.0.abs();
        let rounded = (abs + half) / Self::CENT * Self::CENT;
        Amount(if self.0 < 0 { -rounded } else { rounded })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.round_to_cents().0 / Self::CENT;
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl std::ops::Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
