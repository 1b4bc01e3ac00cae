use super::*;

#[test]
fn daily_series_picks_subject_column() {
    let calculus = daily_series(&NEW_MISTAKES, Subject::Calculus);
    assert_eq!(calculus.len(), 7);
    assert_eq!(calculus[0], Bar::new("Sun", 4200));
    assert_eq!(calculus[6], Bar::new("Sat", 4500));

    let probability = daily_series(&NEW_KNOWLEDGE, Subject::Probability);
    assert_eq!(probability[4], Bar::new("Thu", 2000));
}

#[test]
fn subjects_cover_every_column() {
    let columns: Vec<usize> = Subject::ALL.iter().map(|s| s.column()).collect();
    assert_eq!(columns, vec![0, 1, 2]);
    assert_eq!(Subject::default().label(), "高数");
}

#[test]
fn weekly_is_the_default_period() {
    assert_eq!(Period::default(), Period::Weekly);
    assert_eq!(Period::ALL.map(Period::label), ["Daily", "Weekly", "Monthly"]);
}

#[test]
fn chapter_ratio_lists_every_chapter() {
    let ratio = chapter_ratio(Subject::LinearAlgebra);
    assert_eq!(ratio.len(), CHAPTER_RATIO.len());
    assert_eq!(ratio.iter().map(|b| b.value).sum::<u32>(), 1453);
}

#[test]
fn summary_counts_are_consistent() {
    let [(_, total), _, (_, solved), (_, pending)] = SUMMARY;
    assert_eq!(solved + pending, total);
}
