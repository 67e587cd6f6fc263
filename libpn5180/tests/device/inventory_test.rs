#[path = "../common/mod.rs"]
mod common;

use libpn5180::iso15693::{InventoryOutcome, TagResponse};
use libpn5180::protocol::Command;
use proptest::prelude::*;

#[test]
fn empty_field_reports_no_card_after_sixteen_eofs() -> anyhow::Result<()> {
    let mut dev = common::initialized_mock_device(&[]);
    let inv = dev.inventory_16_slots()?;
    assert_eq!(inv.outcome(), InventoryOutcome::NoCard);
    assert_eq!(inv.count(), 0);
    assert_eq!(inv.frames().count(), 0);
    assert_eq!(dev.transport().eof_count(), 16);
    Ok(())
}

#[test]
fn broad_irq_clear_precedes_request_and_every_eof() -> anyhow::Result<()> {
    let mut dev = common::initialized_mock_device(&[]);
    let start = dev.transport().sent.len();
    dev.inventory_16_slots()?;
    let cmds = common::commands_after(dev.transport(), start);

    let request = cmds
        .iter()
        .position(|c| matches!(c, Command::SendData { payload, .. } if !payload.is_empty()))
        .unwrap();
    assert!(cmds[..request].iter().any(common::is_inventory_clear));

    let mut eofs = 0;
    for (i, c) in cmds.iter().enumerate() {
        if c.is_eof() {
            eofs += 1;
            assert!(common::is_inventory_clear(&cmds[i - 1]), "EOF {} not preceded by clear", eofs);
        }
    }
    assert_eq!(eofs, 16);
    assert_eq!(cmds.iter().filter(|c| common::is_inventory_clear(c)).count(), 17);
    Ok(())
}

#[test]
fn two_tags_decode_to_their_uids() -> anyhow::Result<()> {
    let mut dev = common::initialized_mock_device(&[
        (2, common::fixtures::sample_tag_frame()),
        (11, common::fixtures::second_tag_frame()),
    ]);
    let inv = dev.inventory_16_slots()?;
    assert_eq!(inv.outcome(), InventoryOutcome::Ok);
    let slots: Vec<usize> = inv.responses().iter().map(|r| r.slot).collect();
    assert_eq!(slots, vec![2, 11]);

    let tags: Vec<TagResponse> = inv.tags().into_iter().collect::<Result<_, _>>()?;
    assert_eq!(tags[0].uid.to_hex(), common::fixtures::sample_uid_hex());
    assert_eq!(tags[1].dsfid, 0x3F);
    assert!(tags.iter().all(TagResponse::crc_ok));
    assert!(inv.collided_slots().is_empty());
    Ok(())
}

#[test]
fn inventory_can_run_repeatedly() -> anyhow::Result<()> {
    let mut dev = common::initialized_mock_device(&[(0, common::fixtures::sample_tag_frame())]);
    assert_eq!(dev.inventory_16_slots()?.count(), 1);
    assert_eq!(dev.inventory_16_slots()?.count(), 1);
    assert_eq!(dev.transport().eof_count(), 32);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn single_answer_in_slot_five(len in 1usize..=64) {
        let frame: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let mut dev = common::initialized_mock_device(&[(5, frame.clone())]);
        let (outcome, count, frames) = dev.inventory_16_slots().unwrap().into_parts();
        prop_assert_eq!(outcome, InventoryOutcome::Ok);
        prop_assert_eq!(count, 1);
        prop_assert_eq!(frames.len(), 1);
        prop_assert_eq!(frames[0].len(), len);
        prop_assert_eq!(&frames[0], &frame);
        prop_assert_eq!(dev.transport().eof_count(), 16);
    }
}

#[test]
fn unreadable_slot_does_not_end_the_round() -> anyhow::Result<()> {
    let good = common::fixtures::sample_tag_frame();
    let mut dev = common::initialized_mock_device(&[(2, good.clone()), (5, vec![0; 510])]);
    let inv = dev.inventory_16_slots()?;
    assert_eq!(inv.outcome(), InventoryOutcome::Ok);
    assert_eq!(inv.count(), 1);
    assert_eq!(inv.responses()[0].slot, 2);
    assert_eq!(inv.responses()[0].frame, good);
    assert_eq!(inv.failed_slots(), &[5]);
    assert_eq!(dev.transport().eof_count(), 16);
    Ok(())
}

