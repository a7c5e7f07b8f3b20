use lazy_static::*;

use crate::BigInt;
use crate::big_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::new(vec![ ] , 0),
        BigInt::new(vec![1] , 1),
        BigInt::new(vec![2] , 1),
        BigInt::new(vec![3] , 1),
        BigInt::new(vec![4] , 1),
        BigInt::new(vec![5] , 1),
        BigInt::new(vec![6] , 1),
        BigInt::new(vec![7] , 1),
        BigInt::new(vec![8] , 1),
        BigInt::new(vec![9] , 1),
        BigInt::new(vec![10], 1),
        BigInt::new(vec![11], 1),
        BigInt::new(vec![12], 1),
        BigInt::new(vec![13], 1),
        BigInt::new(vec![14], 1),
        BigInt::new(vec![15], 1),
        BigInt::new(vec![16], 1),
    ];
    pub static ref NEG_CACHE: [BigInt; MAX_CONSTANT + 1] = [
        BigInt::new(vec![ ] ,  0),
        BigInt::new(vec![1] , -1),
        BigInt::new(vec![2] , -1),
        BigInt::new(vec![3] , -1),
        BigInt::new(vec![4] , -1),
        BigInt::new(vec![5] , -1),
        BigInt::new(vec![6] , -1),
        BigInt::new(vec![7] , -1),
        BigInt::new(vec![8] , -1),
        BigInt::new(vec![9] , -1),
        BigInt::new(vec![10], -1),
        BigInt::new(vec![11], -1),
        BigInt::new(vec![12], -1),
        BigInt::new(vec![13], -1),
        BigInt::new(vec![14], -1),
        BigInt::new(vec![15], -1),
        BigInt::new(vec![16], -1),
    ];
}
