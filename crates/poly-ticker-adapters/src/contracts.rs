//! ABI bindings for the Polymath contracts the adapters talk to.

use alloy::sol;

sol! {
    interface ITickerRegistry {
        function expiryLimit() external view returns (uint256);
        function registerTicker(address owner, string symbol, string tokenName, bytes32 swarmHash) external;
    }

    interface IPolyToken {
        function approve(address spender, uint256 value) external returns (bool);
        function balanceOf(address owner) external view returns (uint256);
    }
}
