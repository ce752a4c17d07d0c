//! Hand scoring tests.

use bjbot::{Card, Face, Hand, Suit, face_value, score};

fn card(face: Face) -> Card {
    Card::new(face, Suit::Spades, "")
}

fn hand(faces: &[Face]) -> Hand {
    faces.iter().copied().map(card).collect()
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(Hand::new().score(), 0);
    assert!(!Hand::new().is_bust());
    assert_eq!(score(&[]), 0);
}

#[test]
fn ten_and_ace_is_twenty_one() {
    let hand = hand(&[Face::Ten, Face::Ace]);
    assert_eq!(hand.score(), 21);
    assert!(hand.is_soft());
}

#[test]
fn ace_downgrades_to_avoid_bust() {
    let hand = hand(&[Face::Ten, Face::Ace, Face::Five]);
    assert_eq!(hand.score(), 16);
    assert!(!hand.is_soft());
}

#[test]
fn only_as_many_aces_downgrade_as_needed() {
    let hand = hand(&[Face::Ace, Face::Ace, Face::Nine]);
    assert_eq!(hand.score(), 21);
    assert!(hand.is_soft());

    let four_aces = hand_of_aces(4);
    assert_eq!(four_aces.score(), 14);
}

fn hand_of_aces(count: usize) -> Hand {
    (0..count).map(|_| card(Face::Ace)).collect()
}

#[test]
fn bust_stays_bust_without_aces() {
    let plain = hand(&[Face::King, Face::Queen, Face::Two]);
    assert_eq!(plain.score(), 22);
    assert!(plain.is_bust());

    let spent_aces = hand(&[Face::King, Face::Queen, Face::Ace, Face::Ace]);
    assert_eq!(spent_aces.score(), 22);
    assert!(spent_aces.is_bust());
}

#[test]
fn hands_without_aces_sum_plainly() {
    let non_aces: Vec<Face> = Face::ALL.into_iter().filter(|f| !f.is_ace()).collect();
    for (i, first) in non_aces.iter().enumerate() {
        for second in &non_aces[i..] {
            for third in &non_aces {
                let faces = [*first, *second, *third];
                let expected: u8 = faces.iter().map(|f| f.points()).sum();
                assert_eq!(hand(&faces).score(), expected, "{faces:?}");
            }
        }
    }
}

#[test]
fn scores_never_drop_on_append_without_aces() {
    let sequence = [Face::Two, Face::Nine, Face::Jack, Face::Four, Face::Seven];
    let mut hand = Hand::new();
    let mut last = 0;
    for face in sequence {
        hand.add_card(card(face));
        assert!(hand.score() >= last);
        last = hand.score();
    }
}

#[test]
fn hand_keeps_draw_order() {
    let mut hand = hand(&[Face::Three, Face::King]);
    hand.add_card(card(Face::Ace));
    let faces: Vec<Face> = hand.cards().iter().map(|c| c.face).collect();
    assert_eq!(faces, [Face::Three, Face::King, Face::Ace]);
    assert_eq!(hand.up_card().map(|c| c.face), Some(Face::Three));
    assert_eq!(hand.last().map(|c| c.face), Some(Face::Ace));
}

#[test]
fn resolver_matches_face_points() {
    for face in Face::ALL {
        assert_eq!(face_value(face.label()).unwrap(), face.points());
        assert_eq!(
            face_value(&face.label().to_lowercase()).unwrap(),
            face.points()
        );
    }
}
