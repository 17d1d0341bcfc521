//! BCD-packed 32-bit timecode representation
//!
//! Layout (big-endian, one byte per atom):
//! - Byte 0: Hours
//! - Byte 1: Minutes
//! - Byte 2: Seconds
//! - Byte 3: Frames
//!
//! Each byte holds two decimal digits, tens in the high nibble.

use bytes::{Buf, BufMut};

use crate::{Atom, Atoms, Timecode, TimecodeError, TimecodeResult, Variant};

/// Packed timecode size in bytes
pub const PACKED_SIZE: usize = 4;

/// Largest value a single BCD byte can carry
pub const MAX_BCD_VALUE: u32 = 99;

/// Encode a value in 0..=99 as one BCD byte
#[inline]
pub fn encode_bcd(value: u32) -> Option<u8> {
    if value > MAX_BCD_VALUE {
        return None;
    }
    Some((((value / 10) << 4) | (value % 10)) as u8)
}

/// Decode one BCD byte, rejecting nibbles above 9
#[inline]
pub fn decode_bcd(byte: u8) -> TimecodeResult<u32> {
    let tens = byte >> 4;
    let units = byte & 0x0F;
    if tens > 9 || units > 9 {
        return Err(TimecodeError::InvalidBcd(byte));
    }
    Ok((tens * 10 + units) as u32)
}

/// Pack clock atoms into a 32-bit word
pub fn pack(atoms: Atoms) -> TimecodeResult<u32> {
    let hours = u32::try_from(atoms.hours).unwrap_or(u32::MAX);
    let fields = [
        (Atom::Hours, hours),
        (Atom::Minutes, atoms.minutes),
        (Atom::Seconds, atoms.seconds),
        (Atom::Frames, atoms.frames),
    ];

    let mut bytes = [0u8; PACKED_SIZE];
    for (byte, (atom, value)) in bytes.iter_mut().zip(fields) {
        *byte = encode_bcd(value).ok_or(TimecodeError::AtomOutOfRange {
            atom,
            value: value as u64,
            limit: MAX_BCD_VALUE as u64,
        })?;
    }
    Ok(u32::from_be_bytes(bytes))
}

/// Unpack a 32-bit word into a validated, non-drop timecode
pub fn unpack<V: Variant>(uint: u32, fps: f64) -> TimecodeResult<Timecode<V>> {
    let [hours, minutes, seconds, frames] = uint.to_be_bytes();
    let atoms = Atoms::new(
        decode_bcd(hours)? as u64,
        decode_bcd(minutes)?,
        decode_bcd(seconds)?,
        decode_bcd(frames)?,
    );
    Timecode::from_atoms(atoms, fps, false)
}

/// Read a packed timecode from the front of `buf`
pub fn read_packed<V: Variant, B: Buf>(buf: &mut B, fps: f64) -> TimecodeResult<Timecode<V>> {
    if buf.remaining() < PACKED_SIZE {
        return Err(TimecodeError::BufferTooShort {
            expected: PACKED_SIZE,
            actual: buf.remaining(),
        });
    }
    unpack(buf.get_u32(), fps)
}

impl<V: Variant> Timecode<V> {
    /// Pack the clock atoms as BCD bytes; hours above 99 do not fit
    pub fn to_uint(&self) -> TimecodeResult<u32> {
        pack(self.atoms())
    }

    /// Append the packed timecode to `buf`
    pub fn write_packed<B: BufMut>(&self, buf: &mut B) -> TimecodeResult<()> {
        buf.put_u32(self.to_uint()?);
        Ok(())
    }
}
