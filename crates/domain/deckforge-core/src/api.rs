//! Request bodies for the deck-building service.

use serde::{Deserialize, Serialize};

use crate::DeckFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCommanderRequest {
    pub name: String,
    pub is_partner: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckPartnerRequest {
    pub commander1: String,
    pub commander2: String,
}

/// Build request. All keys are always sent; unset values go out as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDeckRequest {
    pub format: DeckFormat,
    pub card_list: String,
    pub commander: Option<String>,
    pub partner_commander: Option<String>,
    pub deck_goal: Option<String>,
}

impl BuildDeckRequest {
    /// Normalizes form input: blank fields become `None`, and commanders are
    /// never sent for formats that do not use them.
    pub fn from_form(
        format: DeckFormat,
        card_list: &str,
        commander: &str,
        partner: &str,
        deck_goal: &str,
    ) -> Self {
        let commander_field = |value: &str| {
            if format.uses_commander() {
                non_blank(value)
            } else {
                None
            }
        };
        let commander = commander_field(commander);
        // A partner without a primary commander is meaningless.
        let partner_commander = commander.as_ref().and_then(|_| commander_field(partner));

        Self {
            format,
            card_list: card_list.to_string(),
            commander,
            partner_commander,
            deck_goal: non_blank(deck_goal),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_requests_never_carry_commanders() {
        let req = BuildDeckRequest::from_form(
            DeckFormat::Standard,
            "4x Shock",
            "Atraxa, Praetors' Voice",
            "Thrasios",
            "",
        );
        assert_eq!(req.commander, None);
        assert_eq!(req.partner_commander, None);
        assert_eq!(req.deck_goal, None);
        assert_eq!(req.card_list, "4x Shock");
    }

    #[test]
    fn build_request_uses_camel_case_keys_and_explicit_nulls() {
        let req = BuildDeckRequest::from_form(
            DeckFormat::Commander,
            "1x Sol Ring\n",
            " Tymna the Weaver ",
            "",
            "lifegain",
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["format"], "commander");
        assert_eq!(json["cardList"], "1x Sol Ring\n");
        assert_eq!(json["commander"], "Tymna the Weaver");
        assert!(json["partnerCommander"].is_null());
        assert_eq!(json["deckGoal"], "lifegain");
    }

    #[test]
    fn validate_request_sends_is_partner_flag() {
        let json = serde_json::to_value(ValidateCommanderRequest {
            name: "Thrasios, Triton Hero".into(),
            is_partner: true,
        })
        .unwrap();
        assert_eq!(json["isPartner"], true);
        assert_eq!(json["name"], "Thrasios, Triton Hero");
    }
}
