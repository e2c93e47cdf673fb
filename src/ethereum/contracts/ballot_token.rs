//! BallotToken contract bindings.
//!
//! ERC-20 votes token with OpenZeppelin AccessControl; only holders of
//! `MINTER_ROLE` may mint.

use alloy::sol;

sol! {
    interface IBallotToken {
        error AccessControlUnauthorizedAccount(address account, bytes32 neededRole);

        function name() external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);

        function hasRole(bytes32 role, address account) external view returns (bool);

        function mint(address to, uint256 amount) external;
    }
}
