use cosmwasm_std::{
    entry_point, to_json_binary, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, Event,
    MessageInfo, Response, StdResult, Uint128,
};
use cw2::set_contract_version;

use common::ownership::{
    accept_ownership, assert_owner, cancel_ownership_transfer, initialize_owner,
    transfer_ownership, OWNERSHIP,
};
use common::{bytes32_to_hex, keccak256, ExecutableMsg};

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, FeeResponse, InstantiateMsg, IsRelayerResponse, MigrateMsg,
    OutboundCountResponse, QueryMsg,
};
use crate::state::{
    Config, OutboundMessage, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FEES, FEES_COLLECTED,
    OUTBOUND, OUTBOUND_COUNT, RELAYERS,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let fee_collector = match msg.fee_collector {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => owner.clone(),
    };

    initialize_owner(deps.storage, owner.clone())?;
    CONFIG.save(
        deps.storage,
        &Config {
            chain_id: msg.chain_id,
            chain_name: msg.chain_name.clone(),
            fee_denom: msg.fee_denom,
            fee_collector,
        },
    )?;

    for relayer in &msg.relayers {
        let relayer = deps.api.addr_validate(relayer)?;
        RELAYERS.save(deps.storage, &relayer, &true)?;
    }

    OUTBOUND_COUNT.save(deps.storage, &0u64)?;
    FEES_COLLECTED.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("chain_id", msg.chain_id.to_string())
        .add_attribute("chain_name", msg.chain_name)
        .add_attribute("relayer_count", msg.relayers.len().to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::PayDeliveryFee {
            sender,
            destination_chain,
            destination_address,
            payload,
            refund_address,
        } => execute_pay_delivery_fee(
            deps,
            info,
            sender,
            destination_chain,
            destination_address,
            payload,
            refund_address,
        ),
        ExecuteMsg::Submit {
            destination_chain,
            destination_address,
            payload,
        } => execute_submit(deps, info, destination_chain, destination_address, payload),
        ExecuteMsg::Deliver {
            origin_chain_id,
            origin_sender,
            destination_address,
            payload,
        } => execute_deliver(
            deps,
            env,
            info,
            origin_chain_id,
            origin_sender,
            destination_address,
            payload,
        ),
        ExecuteMsg::SetFee {
            destination_chain,
            amount,
        } => execute_set_fee(deps, info, destination_chain, amount),
        ExecuteMsg::RemoveFee { destination_chain } => {
            execute_remove_fee(deps, info, destination_chain)
        }
        ExecuteMsg::AddRelayer { address } => execute_set_relayer(deps, info, address, true),
        ExecuteMsg::RemoveRelayer { address } => execute_set_relayer(deps, info, address, false),
        ExecuteMsg::TransferOwnership { new_owner } => {
            Ok(transfer_ownership(deps, &info, &new_owner)?)
        }
        ExecuteMsg::AcceptOwnership {} => Ok(accept_ownership(deps.storage, &info)?),
        ExecuteMsg::CancelOwnershipTransfer {} => {
            Ok(cancel_ownership_transfer(deps.storage, &info)?)
        }
    }
}

fn execute_pay_delivery_fee(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    destination_chain: String,
    destination_address: String,
    payload: Binary,
    refund_address: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let fee = FEES
        .may_load(deps.storage, &destination_chain)?
        .ok_or_else(|| ContractError::UnsupportedChain {
            chain: destination_chain.clone(),
        })?;

    if let Some(coin) = info.funds.iter().find(|c| c.denom != config.fee_denom) {
        return Err(ContractError::InvalidFunds {
            reason: format!("unexpected denom {}", coin.denom),
        });
    }
    let paid: Uint128 = info.funds.iter().map(|c| c.amount).sum();

    if paid < fee {
        return Err(ContractError::InsufficientFee {
            expected: fee,
            got: paid,
            denom: config.fee_denom,
        });
    }

    let refund_address = deps.api.addr_validate(&refund_address)?;
    let refund = paid - fee;

    let mut messages: Vec<CosmosMsg> = vec![];
    if !fee.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: config.fee_collector.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom.clone(),
                amount: fee,
            }],
        }));
        FEES_COLLECTED.update(deps.storage, |total| -> StdResult<_> { Ok(total + fee) })?;
    }
    if !refund.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: refund_address.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom,
                amount: refund,
            }],
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_event(
            Event::new("delivery_fee_paid")
                .add_attribute("sender", sender)
                .add_attribute("destination_chain", destination_chain)
                .add_attribute("destination_address", destination_address)
                .add_attribute("payload_hash", bytes32_to_hex(&keccak256(&payload)))
                .add_attribute("fee", fee.to_string())
                .add_attribute("refund", refund.to_string())
                .add_attribute("refund_address", refund_address),
        )
        .add_attribute("action", "pay_delivery_fee"))
}

fn execute_submit(
    deps: DepsMut,
    info: MessageInfo,
    destination_chain: String,
    destination_address: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    if !FEES.has(deps.storage, &destination_chain) {
        return Err(ContractError::UnsupportedChain {
            chain: destination_chain,
        });
    }

    let sequence = OUTBOUND_COUNT.load(deps.storage)?;
    OUTBOUND_COUNT.save(deps.storage, &(sequence + 1))?;

    let payload_hash = bytes32_to_hex(&keccak256(&payload));
    OUTBOUND.save(
        deps.storage,
        sequence,
        &OutboundMessage {
            sequence,
            source_address: info.sender.clone(),
            destination_chain: destination_chain.clone(),
            destination_address: destination_address.clone(),
            payload,
        },
    )?;

    Ok(Response::new()
        .add_event(
            Event::new("message_submitted")
                .add_attribute("sequence", sequence.to_string())
                .add_attribute("source_address", info.sender)
                .add_attribute("destination_chain", destination_chain)
                .add_attribute("destination_address", destination_address)
                .add_attribute("payload_hash", payload_hash),
        )
        .add_attribute("action", "submit"))
}

/// Invoke the receiver's `Execute` entry point with the relayer-attested
/// origin. The call is a plain message, so a rejected delivery reverts the
/// whole transaction and can be retried.
fn execute_deliver(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    origin_chain_id: u64,
    origin_sender: String,
    destination_address: String,
    payload: Binary,
) -> Result<Response, ContractError> {
    let is_relayer = RELAYERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false);
    if !is_relayer {
        return Err(ContractError::UnauthorizedRelayer);
    }

    let receiver = deps.api.addr_validate(&destination_address)?;
    let payload_hash = bytes32_to_hex(&keccak256(&payload));

    let execute = ExecutableMsg::Execute {
        origin_chain_id,
        origin_sender: origin_sender.clone(),
        body: payload,
    }
    .into_cosmos_msg(&receiver)?;

    Ok(Response::new()
        .add_message(execute)
        .add_event(
            Event::new("message_delivered")
                .add_attribute("origin_chain_id", origin_chain_id.to_string())
                .add_attribute("origin_sender", origin_sender)
                .add_attribute("destination_address", receiver)
                .add_attribute("payload_hash", payload_hash)
                .add_attribute("relayer", info.sender)
                .add_attribute("height", env.block.height.to_string()),
        )
        .add_attribute("action", "deliver"))
}

fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    destination_chain: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    FEES.save(deps.storage, &destination_chain, &amount)?;

    Ok(Response::new()
        .add_attribute("action", "set_fee")
        .add_attribute("destination_chain", destination_chain)
        .add_attribute("amount", amount.to_string()))
}

fn execute_remove_fee(
    deps: DepsMut,
    info: MessageInfo,
    destination_chain: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    FEES.remove(deps.storage, &destination_chain);

    Ok(Response::new()
        .add_attribute("action", "remove_fee")
        .add_attribute("destination_chain", destination_chain))
}

fn execute_set_relayer(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    active: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let relayer = deps.api.addr_validate(&address)?;
    if active {
        RELAYERS.save(deps.storage, &relayer, &true)?;
    } else {
        RELAYERS.remove(deps.storage, &relayer);
    }

    Ok(Response::new()
        .add_attribute(
            "action",
            if active { "add_relayer" } else { "remove_relayer" },
        )
        .add_attribute("relayer", relayer))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&ConfigResponse {
                chain_id: config.chain_id,
                chain_name: config.chain_name,
                fee_denom: config.fee_denom,
                fee_collector: config.fee_collector,
                fees_collected: FEES_COLLECTED.load(deps.storage)?,
            })
        }
        QueryMsg::Ownership {} => to_json_binary(&OWNERSHIP.load(deps.storage)?),
        QueryMsg::Fee { destination_chain } => {
            let amount = FEES.may_load(deps.storage, &destination_chain)?;
            to_json_binary(&FeeResponse {
                destination_chain,
                amount,
            })
        }
        QueryMsg::Outbound { sequence } => to_json_binary(&OUTBOUND.load(deps.storage, sequence)?),
        QueryMsg::OutboundCount {} => to_json_binary(&OutboundCountResponse {
            count: OUTBOUND_COUNT.load(deps.storage)?,
        }),
        QueryMsg::IsRelayer { address } => {
            let addr = deps.api.addr_validate(&address)?;
            let is_relayer = RELAYERS.may_load(deps.storage, &addr)?.unwrap_or(false);
            to_json_binary(&IsRelayerResponse { is_relayer })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
