// Pattern 1: Raw Pointer Basics
//
// A guided tour of raw pointer semantics: declaration, dereference,
// pointer arithmetic, array decay, flat matrix traversal, and untyped
// (c_void) pointers. Every hazardous step is kept on purpose and marked
// with a UB comment; nothing here is guarded, because the point is to
// show what the guards would otherwise hide.
use colored::Colorize;
use std::ffi::c_void;
use std::mem::size_of;

fn main() {
    // A raw pointer stores the memory address of another variable. The
    // address itself is just a machine word, so any integer can be cast
    // into one. C merely warns about this; Rust makes you spell the cast
    // out, but the resulting pointer is exactly as bogus either way.
    println!("{}", "1. Arbitrary literal addresses".bold());

    let arbitrary = 10usize as *const i32;
    // UB: dereferencing this would read address 10. We only print it.
    println!("a pointer forged from the literal 10: {:p}", arbitrary);
    println!(
        "{}",
        "   (never dereferenced: there is no i32 living at that address)".yellow()
    );

    // The correct way to obtain an address is to take one from a live
    // variable of the matching type. In Rust that is a borrow cast to a
    // raw pointer; the pointer can only ever name the START of the value.
    println!("\n{}", "2. Address-of and typed pointers".bold());

    let mut value_int: i32 = 10;
    let mut value_char: u8 = b'A'; // one byte, like a C char
    let mut value_double: f64 = 2.71828182;

    let int_ptr = &mut value_int as *mut i32;
    let char_ptr = &mut value_char as *mut u8;
    let double_ptr = &mut value_double as *mut f64;

    println!("the i32 lives at {:p}", int_ptr);
    println!("the u8  lives at {:p}", char_ptr);
    println!("the f64 lives at {:p}", double_ptr);

    // UB bait: the same address viewed through the wrong referent type.
    // The cast compiles; any read through it would misinterpret the
    // f64's bytes. Bound here and deliberately never used.
    let _bool_alias = double_ptr as *const bool;
    println!(
        "{}",
        "   (the f64's address also fits in a *const bool: the cast is legal, a read is not)"
            .yellow()
    );

    // Dereference follows the address and reads as many bytes as the
    // referent type occupies. `*ptr` behaves like the variable itself,
    // for reads and for writes.
    println!("\n{}", "3. Dereference: read and write".bold());

    unsafe {
        println!("the integer holds:   {}", *int_ptr);
        println!("the character holds: {}", *char_ptr as char);
        println!("the double holds:    {}", *double_ptr);

        // Parentheses keep deref-asterisk and multiply-asterisk apart
        // for the human reader; the compiler never confuses them.
        *int_ptr = (*int_ptr) * (*int_ptr);
        *char_ptr += 1;
        *double_ptr = 3.1415926535;

        println!("after writing through the pointers:");
        println!("the integer holds:   {}", *int_ptr);
        println!("the character holds: {}", *char_ptr as char);
        println!("the double holds:    {}", *double_ptr);
    }

    // Adding one to a pointer does not add one byte: it advances by the
    // size of the referent type, so the pointer lands on the next whole
    // value. The address delta IS the type's size.
    println!("\n{}", "4. Pointer arithmetic and stride".bold());

    println!(
        "adding 1 to a *mut u8  moves the address by {} byte(s)  (size_of::<u8>()  = {})",
        char_ptr.wrapping_add(1) as usize - char_ptr as usize,
        size_of::<u8>()
    );
    println!(
        "adding 1 to a *mut i32 moves the address by {} byte(s)  (size_of::<i32>() = {})",
        int_ptr.wrapping_add(1) as usize - int_ptr as usize,
        size_of::<i32>()
    );
    println!(
        "adding 1 to a *mut f64 moves the address by {} byte(s)  (size_of::<f64>() = {})",
        double_ptr.wrapping_add(1) as usize - double_ptr as usize,
        size_of::<f64>()
    );

    // An array's elements are contiguous, and a pointer to the first
    // element plus an offset reaches any of the others. Nothing checks
    // the offset against the array's length.
    println!("\n{}", "5. Array and matrix traversal".bold());

    let array: [i32; 5] = [1, 2, 3, 4, 5];
    let base = array.as_ptr();

    for i in 0..5 {
        unsafe {
            println!("element {} at {:p} holds {}", i, base.add(i), *base.add(i));
        }
    }

    // UB: offset 5 is one past the end. Creating the pointer is fine;
    // the read is out of bounds and sees whatever the stack holds there.
    let past_end = base.wrapping_add(5);
    unsafe {
        println!(
            "{} {:p} holds {}",
            "one past the end at".yellow(),
            past_end,
            *past_end
        );
    }

    // Subtraction walks backward. Starting from the last element,
    // negative offsets revisit the array in reverse.
    let last = base.wrapping_add(4);
    for i in 0..5 {
        unsafe {
            println!(
                "offset -{} from the last element at {:p} holds {}",
                i,
                last.wrapping_sub(i),
                *last.wrapping_sub(i)
            );
        }
    }

    // A 5x5 matrix is 25 contiguous i32s in row-major order, so its
    // address reinterpreted as *const i32 lets one post-incrementing
    // pointer sweep the whole thing.
    let matrix: [[i32; 5]; 5] = [
        [1, 2, 3, 4, 5],
        [6, 7, 8, 9, 10],
        [11, 12, 13, 14, 15],
        [16, 17, 18, 19, 20],
        [21, 22, 23, 24, 25],
    ];

    println!("the matrix, walked flat:");
    let mut flat = matrix.as_ptr() as *const i32;
    for i in 0..25 {
        unsafe {
            print!("{:2}{}", *flat, if (i + 1) % 5 == 0 { '\n' } else { ' ' });
        }
        flat = flat.wrapping_add(1);
    }

    // c_void is the untyped pointer: any typed pointer converts to it
    // and back without loss. It has no referent size, so it cannot be
    // dereferenced directly; it must be cast back to a typed pointer
    // first. (`*generic` does not even compile.)
    println!("\n{}", "6. Generic (c_void) pointer round-trip".bold());

    let mut generic: *const c_void = int_ptr as *const c_void;
    unsafe {
        println!("the integer through c_void:   {}", *(generic as *const i32));
    }

    generic = double_ptr as *const c_void;
    unsafe {
        println!("the double through c_void:    {}", *(generic as *const f64));
    }

    generic = char_ptr as *const c_void;
    unsafe {
        println!(
            "the character through c_void: {}",
            *(generic as *const u8) as char
        );
    }

    println!("\nPointer basics example completed");
}

#[cfg(test)]
mod tests {
    use std::ffi::c_void;
    use std::mem::size_of;

    #[test]
    fn test_deref_matches_variable_after_binding() {
        let n: i32 = 10;
        let ch: u8 = b'A';
        let d: f64 = 2.71828182;

        unsafe {
            assert_eq!(*(&n as *const i32), n);
            assert_eq!(*(&ch as *const u8), ch);
            assert_eq!(*(&d as *const f64), d);
        }
    }

    #[test]
    fn test_stride_equals_referent_size() {
        let n: i32 = 0;
        let ch: u8 = 0;
        let d: f64 = 0.0;

        let pn = &n as *const i32;
        let pc = &ch as *const u8;
        let pd = &d as *const f64;

        assert_eq!(pn.wrapping_add(1) as usize - pn as usize, size_of::<i32>());
        assert_eq!(pc.wrapping_add(1) as usize - pc as usize, size_of::<u8>());
        assert_eq!(pd.wrapping_add(1) as usize - pd as usize, size_of::<f64>());
    }

    #[test]
    fn test_writes_through_pointer_reach_the_variable() {
        let mut n: i32 = 10;
        let p = &mut n as *mut i32;
        unsafe {
            *p = (*p) * (*p);
        }
        assert_eq!(n, 100);

        let mut ch: u8 = b'A';
        let p = &mut ch as *mut u8;
        unsafe {
            *p += 1;
        }
        assert_eq!(ch, b'B');

        let mut d: f64 = 2.71828182;
        let p = &mut d as *mut f64;
        unsafe {
            *p = 3.1415926535;
        }
        assert_eq!(d, 3.1415926535);
    }

    #[test]
    fn test_forward_walk_reads_in_order() {
        let array: [i32; 5] = [1, 2, 3, 4, 5];
        let base = array.as_ptr();

        let walked: Vec<i32> = (0..5).map(|i| unsafe { *base.add(i) }).collect();
        assert_eq!(walked, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_backward_walk_reads_in_reverse() {
        let array: [i32; 5] = [1, 2, 3, 4, 5];
        let last = unsafe { array.as_ptr().add(4) };

        let walked: Vec<i32> = (0..5).map(|i| unsafe { *last.sub(i) }).collect();
        assert_eq!(walked, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_matrix_walks_flat_in_row_major_order() {
        let matrix: [[i32; 5]; 5] = [
            [1, 2, 3, 4, 5],
            [6, 7, 8, 9, 10],
            [11, 12, 13, 14, 15],
            [16, 17, 18, 19, 20],
            [21, 22, 23, 24, 25],
        ];
        let flat = matrix.as_ptr() as *const i32;

        let walked: Vec<i32> = (0..25).map(|i| unsafe { *flat.add(i) }).collect();
        assert_eq!(walked, (1..=25).collect::<Vec<i32>>());
    }

    #[test]
    fn test_c_void_round_trip_preserves_values() {
        let n: i32 = 10;
        let generic = &n as *const i32 as *const c_void;
        assert_eq!(unsafe { *(generic as *const i32) }, 10);

        let d: f64 = 2.71828182;
        let generic = &d as *const f64 as *const c_void;
        assert_eq!(unsafe { *(generic as *const f64) }, 2.71828182);

        let ch: u8 = b'A';
        let generic = &ch as *const u8 as *const c_void;
        assert_eq!(unsafe { *(generic as *const u8) }, b'A');
    }
}
