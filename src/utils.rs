//! Common tools

/// The state of a bit,
/// It's either [`BitState::Clear`] to represent a 0
/// or [`BitState::Set`] to represent a 1
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitState {
    /// Bit is 0
    Clear,
    /// Bit is 1
    Set,
}

/// Simple bit ops
pub trait BitOps {
    #[allow(missing_docs)]
    fn set_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn clear_bit(&mut self, pos: u8) -> Self;
    #[allow(missing_docs)]
    fn check_bit(&self, pos: u8) -> BitState;

    /// Set or clear the bit at `pos`, depending on `state`
    fn put_bit(&mut self, pos: u8, state: BitState) -> Self;
}

impl BitOps for u8 {
    fn set_bit(&mut self, pos: u8) -> Self {
        assert!(pos <= 7, "bit offset larger than 7");
        *self |= 1u8 << pos;
        *self
    }

    fn clear_bit(&mut self, pos: u8) -> Self {
        assert!(pos <= 7, "bit offset larger than 7");
        *self &= !(1u8 << pos);
        *self
    }

    fn check_bit(&self, pos: u8) -> BitState {
        assert!(pos <= 7, "bit offset larger than 7");

        match (*self >> pos) & 1 == 1 {
            true => BitState::Set,
            false => BitState::Clear,
        }
    }

    fn put_bit(&mut self, pos: u8, state: BitState) -> Self {
        match state {
            BitState::Set => self.set_bit(pos),
            BitState::Clear => self.clear_bit(pos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_clear_single_bits() {
        let mut byte = 0b0000_1000u8;

        assert_eq!(byte.set_bit(2), 0b0000_1100);
        assert_eq!(byte.check_bit(2), BitState::Set);

        assert_eq!(byte.clear_bit(3), 0b0000_0100);
        assert_eq!(byte.check_bit(3), BitState::Clear);

        assert_eq!(byte.put_bit(0, BitState::Set), 0b0000_0101);
        assert_eq!(byte.put_bit(2, BitState::Clear), 0b0000_0001);
    }

    #[test]
    #[should_panic(expected = "bit offset larger than 7")]
    fn bit_offset_out_of_range() {
        let mut byte = 0u8;
        byte.set_bit(8);
    }
}
