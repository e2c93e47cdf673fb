//! TokenizedBallot contract bindings.

use alloy::sol;

sol! {
    interface ITokenizedBallot {
        function winnerName() external view returns (bytes32 winnerName_);
    }
}
