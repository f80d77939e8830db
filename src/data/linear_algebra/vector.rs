//! # Bounded vector
//!
//! Wrapping a `Vec` such that every element access is checked against a logical index window.
//! Length is fixed at creation and the window may start at a nonzero index, which permits
//! addressing a container in the coordinate system of a larger structure (a matrix row storing
//! only columns `i..n`, for example).
use std::fmt;
use std::fmt::Display;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};
use std::slice::Iter;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::error::Error;

/// Uses a `Vec` as underlying data structure. Size and start index are fixed at creation.
///
/// Valid logical indices are exactly the closed-open window
/// `[start_index, start_index + size)`; any access outside it produces a typed error rather than
/// being clamped or dereferenced unchecked. The instance exclusively owns its storage: cloning
/// always produces independent storage.
#[derive(Debug, Eq, PartialEq)]
pub struct BoundedVector<T> {
    start_index: usize,
    data: Vec<T>,
}

/// Validate a window before allocating for it.
///
/// The upper bound of the window must be representable, such that later range checks can compute
/// `start_index + size` without overflowing.
fn check_window(size: usize, start_index: usize) -> Result<(), Error> {
    if size == 0 || size > MAX_VECTOR_SIZE {
        return Err(Error::InvalidSize { size, maximum: MAX_VECTOR_SIZE });
    }
    if start_index.checked_add(size).is_none() {
        return Err(Error::InvalidIndex { start_index, size });
    }

    Ok(())
}

impl<T: Zero + Clone> BoundedVector<T> {
    /// Create a zero-initialized vector indexed from `0`.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of elements, at least `1` and at most `MAX_VECTOR_SIZE`.
    ///
    /// # Return value
    ///
    /// A vector of `size` zeros, or an `Error::InvalidSize` when the size is outside the allowed
    /// range.
    pub fn new(size: usize) -> Result<Self, Error> {
        Self::with_start_index(size, 0)
    }

    /// Create a zero-initialized vector whose first logical index is `start_index`.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of elements, at least `1` and at most `MAX_VECTOR_SIZE`.
    /// * `start_index`: Logical index of the first element.
    ///
    /// # Return value
    ///
    /// A vector of `size` zeros valid at indices `[start_index, start_index + size)`, an
    /// `Error::InvalidSize` when the size is outside the allowed range, or an
    /// `Error::InvalidIndex` when the window's upper bound is not representable.
    pub fn with_start_index(size: usize, start_index: usize) -> Result<Self, Error> {
        check_window(size, start_index)?;

        Ok(Self { start_index, data: vec![T::zero(); size], })
    }
}

impl<T> BoundedVector<T> {
    /// Wrap existing values, validating the same window contract as construction.
    pub fn from_values(values: Vec<T>, start_index: usize) -> Result<Self, Error> {
        check_window(values.len(), start_index)?;

        Ok(Self { start_index, data: values, })
    }

    /// The number of elements of this vector.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The logical index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Translate a logical index into a storage offset, rejecting indices outside the window.
    fn offset(&self, index: usize) -> Result<usize, Error> {
        // The window's upper bound is representable by the construction invariant.
        if index >= self.start_index && index < self.start_index + self.data.len() {
            Ok(index - self.start_index)
        } else {
            Err(Error::IndexOutOfRange {
                index,
                start_index: self.start_index,
                size: self.data.len(),
            })
        }
    }

    /// Retrieve the value at a logical index.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let offset = self.offset(index)?;

        Ok(&self.data[offset])
    }

    /// Retrieve the value at a logical index for in-place mutation.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let offset = self.offset(index)?;

        Ok(&mut self.data[offset])
    }

    /// Set the value at a logical index.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        let offset = self.offset(index)?;
        self.data[offset] = value;

        Ok(())
    }

    /// Iterate over the values of this vector in logical order.
    pub fn iter_values(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Binary arithmetic requires operands of equal size; assignment does not.
    fn check_equal_size(&self, other: &Self) -> Result<(), Error> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(Error::SizeMismatch { left: self.size(), right: other.size(), })
        }
    }

    /// Add another vector of the same size, elementwise.
    ///
    /// The result keeps this vector's start index.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the operands' sizes differ.
    pub fn try_add(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r T: Add<&'r T, Output = T>,
    {
        self.check_equal_size(other)?;

        Ok(Self {
            start_index: self.start_index,
            data: self.data.iter().zip_eq(&other.data).map(|(value, rhs)| value + rhs).collect(),
        })
    }

    /// Subtract another vector of the same size, elementwise.
    ///
    /// The result keeps this vector's start index.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the operands' sizes differ.
    pub fn try_sub(&self, other: &Self) -> Result<Self, Error>
    where
        for<'r> &'r T: Sub<&'r T, Output = T>,
    {
        self.check_equal_size(other)?;

        Ok(Self {
            start_index: self.start_index,
            data: self.data.iter().zip_eq(&other.data).map(|(value, rhs)| value - rhs).collect(),
        })
    }

    /// Compute the inner product with another vector of the same size.
    ///
    /// # Errors
    ///
    /// `Error::SizeMismatch` when the operands' sizes differ.
    pub fn inner_product(&self, other: &Self) -> Result<T, Error>
    where
        T: Zero + AddAssign,
        for<'r> &'r T: Mul<&'r T, Output = T>,
    {
        self.check_equal_size(other)?;

        let mut total = T::zero();
        for (value, rhs) in self.data.iter().zip_eq(&other.data) {
            total += value * rhs;
        }

        Ok(total)
    }
}

impl<T: Clone> Clone for BoundedVector<T> {
    fn clone(&self) -> Self {
        Self { start_index: self.start_index, data: self.data.clone(), }
    }

    /// Assignment: reshape this vector to the source's size and start index and copy all
    /// elements, reusing the existing allocation where possible. Never fails on a size
    /// difference.
    fn clone_from(&mut self, source: &Self) {
        self.start_index = source.start_index;
        self.data.clone_from(&source.data);
    }
}

impl<T> Index<usize> for BoundedVector<T> {
    type Output = T;

    /// Logical-index sugar over [`BoundedVector::get`]; panics with the typed error's message
    /// when the index lies outside the window.
    fn index(&self, index: usize) -> &Self::Output {
        match self.offset(index) {
            Ok(offset) => &self.data[offset],
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> IndexMut<usize> for BoundedVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.offset(index) {
            Ok(offset) => &mut self.data[offset],
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> Add<T> for &BoundedVector<T>
where
    for<'r> &'r T: Add<&'r T, Output = T>,
{
    type Output = BoundedVector<T>;

    fn add(self, rhs: T) -> Self::Output {
        BoundedVector {
            start_index: self.start_index,
            data: self.data.iter().map(|value| value + &rhs).collect(),
        }
    }
}

impl<T> Sub<T> for &BoundedVector<T>
where
    for<'r> &'r T: Sub<&'r T, Output = T>,
{
    type Output = BoundedVector<T>;

    fn sub(self, rhs: T) -> Self::Output {
        BoundedVector {
            start_index: self.start_index,
            data: self.data.iter().map(|value| value - &rhs).collect(),
        }
    }
}

impl<T> Mul<T> for &BoundedVector<T>
where
    for<'r> &'r T: Mul<&'r T, Output = T>,
{
    type Output = BoundedVector<T>;

    fn mul(self, rhs: T) -> Self::Output {
        BoundedVector {
            start_index: self.start_index,
            data: self.data.iter().map(|value| value * &rhs).collect(),
        }
    }
}

impl<T: Display> Display for BoundedVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "{}", value)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::MAX_VECTOR_SIZE;
    use crate::data::linear_algebra::error::Error;
    use crate::data::linear_algebra::vector::BoundedVector;

    /// The values `[1, 2, 3, 4, 5]` at indices `0..5`.
    fn get_test_vector() -> BoundedVector<i32> {
        BoundedVector::from_values(vec![1, 2, 3, 4, 5], 0).unwrap()
    }

    #[test]
    fn new() {
        let v = BoundedVector::<i32>::new(5).unwrap();

        assert_eq!(v.size(), 5);
        assert_eq!(v.start_index(), 0);
        assert!(v.iter_values().all(|&value| value == 0));
    }

    #[test]
    fn new_rejects_invalid_sizes() {
        assert_eq!(
            BoundedVector::<i32>::new(0),
            Err(Error::InvalidSize { size: 0, maximum: MAX_VECTOR_SIZE, }),
        );
        assert_eq!(
            BoundedVector::<i32>::new(MAX_VECTOR_SIZE + 1),
            Err(Error::InvalidSize { size: MAX_VECTOR_SIZE + 1, maximum: MAX_VECTOR_SIZE, }),
        );
    }

    #[test]
    fn new_at_maximum_size() {
        assert!(BoundedVector::<i32>::new(MAX_VECTOR_SIZE).is_ok());
    }

    #[test]
    fn with_start_index() {
        let v = BoundedVector::<i32>::with_start_index(4, 2).unwrap();

        assert_eq!(v.size(), 4);
        assert_eq!(v.start_index(), 2);
        assert_eq!(v.get(2), Ok(&0));
        assert_eq!(v.get(5), Ok(&0));
    }

    #[test]
    fn window_upper_bound_must_be_representable() {
        assert_eq!(
            BoundedVector::<i32>::with_start_index(5, usize::MAX),
            Err(Error::InvalidIndex { start_index: usize::MAX, size: 5, }),
        );
    }

    #[test]
    fn from_values() {
        let v = get_test_vector();

        assert_eq!(v.size(), 5);
        assert_eq!(v.iter_values().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(
            BoundedVector::<i32>::from_values(vec![], 0),
            Err(Error::InvalidSize { size: 0, maximum: MAX_VECTOR_SIZE, }),
        );
    }

    #[test]
    fn get_set() {
        let mut v = BoundedVector::<i32>::new(4).unwrap();

        v.set(0, 4).unwrap();
        assert_eq!(v.get(0), Ok(&4));

        *v.get_mut(3).unwrap() = -1;
        assert_eq!(v.get(3), Ok(&-1));
    }

    #[test]
    fn access_outside_window() {
        let mut v = BoundedVector::<i32>::with_start_index(5, 2).unwrap();
        let error = |index| Error::IndexOutOfRange { index, start_index: 2, size: 5, };

        assert_eq!(v.get(1), Err(error(1)));
        assert_eq!(v.get(7), Err(error(7)));
        assert_eq!(v.set(0, 1), Err(error(0)));
        assert_eq!(v.get_mut(7), Err(error(7)));
        assert!(v.get(2).is_ok());
        assert!(v.get(6).is_ok());
    }

    #[test]
    #[should_panic]
    fn index_outside_window() {
        let v = get_test_vector();

        let _ = v[5];
    }

    #[test]
    #[should_panic]
    fn index_mut_below_start_index() {
        let mut v = BoundedVector::<i32>::with_start_index(3, 1).unwrap();

        v[0] = 1;
    }

    #[test]
    fn clone_is_equal_to_source() {
        let v = get_test_vector();

        assert_eq!(v.clone(), v);
    }

    #[test]
    fn clone_has_its_own_memory() {
        let v = get_test_vector();
        let mut copy = v.clone();

        copy[0] = 99;

        assert_eq!(v[0], 1);
        assert_eq!(copy[0], 99);
        assert_ne!(v, copy);
    }

    #[test]
    fn clone_from_reshapes() {
        let source = BoundedVector::from_values(vec![1, 2, 3], 4).unwrap();

        let mut destination = BoundedVector::<i32>::new(10).unwrap();
        destination.clone_from(&source);
        assert_eq!(destination, source);
        assert_eq!(destination.size(), 3);
        assert_eq!(destination.start_index(), 4);

        let mut destination = BoundedVector::<i32>::new(2).unwrap();
        destination.clone_from(&source);
        assert_eq!(destination, source);
    }

    #[test]
    fn equality() {
        let v = get_test_vector();
        assert_eq!(v, v);

        let mut other = v.clone();
        other.set(2, -3).unwrap();
        assert_ne!(v, other);

        assert_ne!(v, BoundedVector::<i32>::new(10).unwrap());

        let shifted = BoundedVector::from_values(vec![1, 2, 3, 4, 5], 1).unwrap();
        assert_ne!(v, shifted);
    }

    #[test]
    fn scalar_arithmetic() {
        let v = get_test_vector();

        assert_eq!(&v + 5, BoundedVector::from_values(vec![6, 7, 8, 9, 10], 0).unwrap());
        assert_eq!(&v - 5, BoundedVector::from_values(vec![-4, -3, -2, -1, 0], 0).unwrap());
        assert_eq!(&v * 5, BoundedVector::from_values(vec![5, 10, 15, 20, 25], 0).unwrap());

        let shifted = BoundedVector::from_values(vec![1, 2], 3).unwrap();
        assert_eq!((&shifted * 2).start_index(), 3);
    }

    #[test]
    fn add_equal_sizes() {
        let v = get_test_vector();
        let w = get_test_vector();

        assert_eq!(
            v.try_add(&w),
            BoundedVector::from_values(vec![2, 4, 6, 8, 10], 0),
        );
    }

    #[test]
    fn subtract_equal_sizes() {
        let v = get_test_vector();
        let w = get_test_vector();

        assert_eq!(v.try_sub(&w), BoundedVector::<i32>::new(5));
    }

    #[test]
    fn inner_product() {
        let v = get_test_vector();
        let w = get_test_vector();

        assert_eq!(v.inner_product(&w), Ok(1 + 4 + 9 + 16 + 25));
    }

    #[test]
    fn arithmetic_rejects_unequal_sizes() {
        let v = get_test_vector();
        let w = BoundedVector::<i32>::new(10).unwrap();

        assert_eq!(v.try_add(&w), Err(Error::SizeMismatch { left: 5, right: 10, }));
        assert_eq!(v.try_sub(&w), Err(Error::SizeMismatch { left: 5, right: 10, }));
        assert_eq!(v.inner_product(&w), Err(Error::SizeMismatch { left: 5, right: 10, }));
    }

    #[test]
    fn works_for_floats() {
        let v = BoundedVector::from_values(vec![0.5_f64, 1.5], 0).unwrap();

        assert_eq!(&v * 2., BoundedVector::from_values(vec![1., 3.], 0).unwrap());
        assert_eq!(v.inner_product(&v), Ok(0.25 + 2.25));
    }
}
