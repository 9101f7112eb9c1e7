//! End-to-end: upstream JSON payload in, serialized standings out.

use ::common::Contest;
use serde_json::json;
use standings::rank_contest;

fn payload() -> serde_json::Value {
    json!({
        "id": 5,
        "startTime": "2025-03-01T09:00:00.000Z",
        "endTime": "2025-03-01T12:00:00.000Z",
        "status": "ACTIVE",
        "questions": [
            { "question": {
                "id": "q1", "leetcodeUrl": "https://leetcode.com/problems/two-sum",
                "difficulty": "EASY", "points": 2, "slug": "two-sum"
            }},
            { "question": {
                "id": "q2", "codeforcesUrl": "https://codeforces.com/problemset/problem/4/A",
                "difficulty": "HARD", "points": 5, "slug": "watermelon"
            }}
        ],
        "attemptedGroups": [
            {
                "id": "goc-low", "score": 2,
                "group": {
                    "id": "g1", "name": "Low", "score": 2,
                    "coordinator": { "username": "lee" },
                    "members": [{ "id": "m1", "username": "ana" }]
                }
            },
            {
                "id": "goc-high", "score": 7,
                "group": {
                    "id": "g2", "name": "High", "score": 7,
                    "coordinator": { "username": "kim" },
                    "members": [
                        {
                            "id": "m2", "username": "bo", "isAllowedToParticipate": false,
                            "submissions": [{
                                "id": "s1", "score": 5, "status": "ACCEPTED",
                                "createdAt": "2025-03-01T09:10:00.000Z",
                                "question": { "id": "q2", "slug": "watermelon", "points": 5 }
                            }]
                        },
                        {
                            "id": "m3", "username": "cy", "isAllowedToParticipate": null,
                            "submissions": [
                                {
                                    "id": "s2", "score": 2, "status": "ACCEPTED",
                                    "createdAt": "2025-03-01T09:20:00.000Z",
                                    "question": { "id": "q1", "slug": "two-sum", "points": 2 }
                                },
                                {
                                    "id": "s3", "score": 5, "status": "ACCEPTED",
                                    "createdAt": "2025-03-01T10:00:00.000Z",
                                    "question": { "id": "q2", "slug": "watermelon", "points": 5 }
                                }
                            ]
                        }
                    ]
                }
            }
        ]
    })
}

#[test]
fn upstream_payload_ranks_and_serializes() {
    let contest: Contest = serde_json::from_value(payload()).unwrap();
    let standings = serde_json::to_value(rank_contest(&contest).unwrap()).unwrap();

    assert_eq!(standings["contest_id"], 5);
    assert_eq!(standings["status"], "ACTIVE");
    assert_eq!(standings["status_label"], "Active");

    let questions = &standings["questions"];
    assert_eq!(questions[0]["header"], "QA");
    assert_eq!(questions[0]["url"], "https://leetcode.com/problems/two-sum");
    assert_eq!(questions[0]["difficulty_label"], "Easy");
    assert_eq!(questions[1]["url"], "https://codeforces.com/problemset/problem/4/A");
    assert_eq!(questions[1]["points_label"], "5 pts");

    let top = &standings["groups"][0];
    assert_eq!(top["entry_id"], "goc-high");
    assert_eq!(top["rank"], 1);
    assert_eq!(top["badge"], "gold");
    assert_eq!(top["participation"]["not_allowed"], 1);

    let first = &top["members"][0];
    assert_eq!(first["username"], "cy");
    assert_eq!(first["eligibility"], true);
    assert_eq!(first["rank"]["ranked"], 1);
    assert_eq!(first["total_score"], 7);
    assert_eq!(first["cells"][0]["state"]["kind"], "submitted");
    assert_eq!(first["cells"][0]["state"]["score"], 2);

    let second = &top["members"][1];
    assert_eq!(second["username"], "bo");
    assert_eq!(second["eligibility"], false);
    assert_eq!(second["rank"], "unranked");
    assert_eq!(second["rank_label"], "-");
    assert_eq!(second["cells"][1]["state"]["kind"], "unavailable");

    let low = &standings["groups"][1];
    assert_eq!(low["rank"], 2);
    assert_eq!(low["members"][0]["total_score"], 0);
    assert_eq!(low["members"][0]["cells"][0]["state"]["kind"], "no_submission");
}

#[test]
fn conflicting_question_links_are_rejected_at_parse() {
    let mut value = payload();
    value["questions"][0]["question"]["codeforcesUrl"] = json!("https://codeforces.com/x");
    assert!(serde_json::from_value::<Contest>(value).is_err());
}
