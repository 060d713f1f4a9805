use ballotbox_core::{BallotItem, BallotItemOption, Vote, VoteConfirmation, WRITE_IN_OPTION_ID};

fn sample_ballot_item() -> BallotItem {
    BallotItem {
        ballot_item_id: 123,
        options: vec![
            BallotItemOption {
                option_id: 1,
                name: "Trey Anastasio".to_string(),
                description: Some("Guitarist and lead vocalist for the band Phish".to_string()),
            },
            BallotItemOption {
                option_id: 2,
                name: "Page McConnell".to_string(),
                description: None,
            },
        ],
        allows_write_in: true,
    }
}

#[test]
fn has_option_checks_identity_not_names() {
    let ballot = sample_ballot_item();

    assert!(ballot.has_option(1));
    assert!(ballot.has_option(2));
    assert!(!ballot.has_option(3));
    assert!(!ballot.has_option(WRITE_IN_OPTION_ID));
}

#[test]
fn vote_serialization_uses_expected_wire_fields() {
    let confirmation = VoteConfirmation {
        vote: Vote {
            citizen_id: 12345,
            ballot_item_id: 123,
            option_id: WRITE_IN_OPTION_ID,
            write_in: Some("Chris Kuroda".to_string()),
        },
        success: true,
    };

    let json = serde_json::to_value(&confirmation).unwrap();
    assert_eq!(json["vote"]["citizen_id"], 12345);
    assert_eq!(json["vote"]["ballot_item_id"], 123);
    assert_eq!(json["vote"]["option_id"], 0);
    assert_eq!(json["vote"]["write_in"], "Chris Kuroda");
    assert_eq!(json["success"], true);

    let decoded: VoteConfirmation = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, confirmation);
}

#[test]
fn ballot_item_serialization_keeps_option_order_and_flags() {
    let ballot = sample_ballot_item();

    let json = serde_json::to_value(&ballot).unwrap();
    assert_eq!(json["ballot_item_id"], 123);
    assert_eq!(json["allows_write_in"], true);
    assert_eq!(json["options"][0]["option_id"], 1);
    assert_eq!(json["options"][0]["name"], "Trey Anastasio");
    assert_eq!(json["options"][1]["description"], serde_json::Value::Null);

    let decoded: BallotItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, ballot);
}
