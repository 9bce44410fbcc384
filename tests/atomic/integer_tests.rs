/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_integer!(AtomicI8, i8, atomic_i8_tests);
test_atomic_integer!(AtomicU8, u8, atomic_u8_tests);
test_atomic_integer!(AtomicI16, i16, atomic_i16_tests);
test_atomic_integer!(AtomicU16, u16, atomic_u16_tests);
test_atomic_integer!(AtomicI32, i32, atomic_i32_tests);
test_atomic_integer!(AtomicU32, u32, atomic_u32_tests);
test_atomic_integer!(AtomicI64, i64, atomic_i64_tests);
test_atomic_integer!(AtomicU64, u64, atomic_u64_tests);
test_atomic_integer!(AtomicIsize, isize, atomic_isize_tests);
test_atomic_integer!(AtomicUsize, usize, atomic_usize_tests);

mod signedness {
    use prism3_atomic_extremum::{
        AtomicI8,
        AtomicU8,
        Hardware,
        MemoryOrder,
    };

    #[test]
    fn test_signed_byte_compares_as_signed() {
        let atomic = AtomicI8::new(-100);
        assert_eq!(atomic.fetch_max_with::<Hardware>(-1, MemoryOrder::Relaxed), -100);
        assert_eq!(atomic.load(), -1);
        assert_eq!(atomic.fetch_min_with::<Hardware>(-128, MemoryOrder::Release), -1);
        assert_eq!(atomic.load(), -128);
    }

    #[test]
    fn test_unsigned_byte_compares_as_unsigned() {
        let atomic = AtomicU8::new(0x7f);
        assert_eq!(atomic.fetch_max_with::<Hardware>(0x80, MemoryOrder::Acquire), 0x7f);
        assert_eq!(atomic.load(), 0x80);
        assert_eq!(atomic.fetch_min_with::<Hardware>(0xff, MemoryOrder::AcqRel), 0x80);
        assert_eq!(atomic.load(), 0x80);
    }
}
