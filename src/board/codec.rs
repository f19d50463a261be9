//! Checked deserialization of board types: decoded values go through the same
//! validation as the constructors.

use serde::Deserialize;
use thiserror::Error;

use super::{square::BoardSize, tour::Tour};

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Error)]
pub enum DecodeError {
    #[error("Board dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u16, height: u16 },
    #[error("Tour order is not a permutation of the {0} board's squares")]
    InvalidOrder(BoardSize),
}

#[derive(Deserialize)]
pub(crate) struct RawBoardSize {
    width: u16,
    height: u16,
}
impl TryFrom<RawBoardSize> for BoardSize {
    type Error = DecodeError;

    fn try_from(RawBoardSize { width, height }: RawBoardSize) -> Result<Self, Self::Error> {
        BoardSize::new(width, height).ok_or(DecodeError::ZeroDimension { width, height })
    }
}

#[derive(Deserialize)]
pub(crate) struct RawTour {
    size: BoardSize,
    order: Vec<u32>,
}
impl TryFrom<RawTour> for Tour {
    type Error = DecodeError;

    fn try_from(RawTour { size, order }: RawTour) -> Result<Self, Self::Error> {
        Tour::from_order(size, order).ok_or(DecodeError::InvalidOrder(size))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        board::{BoardSize, Tour},
        tests::six_by_six_tour,
    };

    #[test]
    fn tour_survives_json() {
        let size = BoardSize::new(6, 6).unwrap();
        let tour = Tour::from_path(size, &six_by_six_tour()).unwrap();
        let json = serde_json::to_string(&tour).unwrap();
        assert_eq!(serde_json::from_str::<Tour>(&json).unwrap(), tour);
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(serde_json::from_str::<BoardSize>(r#"{"width":0,"height":5}"#).is_err());
        let tour = r#"{"size":{"width":0,"height":1},"order":[]}"#;
        assert!(serde_json::from_str::<Tour>(tour).is_err());
    }

    #[test]
    fn mismatched_order_is_rejected() {
        let short = r#"{"size":{"width":2,"height":2},"order":[0,1,2]}"#;
        assert!(serde_json::from_str::<Tour>(short).is_err());
        let repeated = r#"{"size":{"width":2,"height":2},"order":[0,1,1,3]}"#;
        assert!(serde_json::from_str::<Tour>(repeated).is_err());
    }
}
