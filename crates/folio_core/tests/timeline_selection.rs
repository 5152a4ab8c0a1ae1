use folio_core::icons::{Icon, IconRegistry};
use folio_core::timeline::{Category, Period, Timeline, TimelineConfig, find_period_at_year};

fn period(id: &str, start: i32, end: i32, title: &str) -> Period {
    Period {
        id: id.to_string(),
        start_year: start,
        end_year: end,
        title: title.to_string(),
        organization: format!("{title} Inc"),
        description: String::new(),
        category: Category::Work,
        technologies: vec!["Git".to_string()],
    }
}

#[test]
fn shared_boundary_year_goes_to_first_listed_period() {
    let periods = vec![
        period("1", 2017, 2017, "Internship"),
        period("2", 2018, 2020, "FS Dev A"),
        period("3", 2020, 2025, "FS Dev B"),
    ];

    assert_eq!(find_period_at_year(&periods, 2020).unwrap().title, "FS Dev A");
    assert_eq!(find_period_at_year(&periods, 2021).unwrap().title, "FS Dev B");
    assert!(find_period_at_year(&periods, 2016).is_none());
}

#[test]
fn walking_the_timeline_moves_selection_and_wave() {
    let mut timeline = Timeline::new(TimelineConfig::default());

    for year in 2017..=2025 {
        timeline.select_year(year);
        assert_eq!(timeline.selected_year(), year);

        let peak_index = ((year - 2017) * 2) as usize;
        let bars = timeline.bars();
        assert_eq!(bars[peak_index].year, year);
        assert_eq!(bars[peak_index].half, 1);
        assert_eq!(bars[peak_index].weight, timeline.curve().peak());

        let emphasized = bars.iter().filter(|b| b.emphasized).count();
        // the peak plus its direct neighbours that exist
        let expected = if peak_index == 0 { 2 } else { 3 };
        assert_eq!(emphasized, expected, "year {year}");
    }
}

#[test]
fn selected_period_technologies_resolve_to_icons() {
    let mut timeline = Timeline::default();
    let registry = IconRegistry::default();

    let period = timeline.select_year(2023).unwrap();
    let icons: Vec<Icon> = period
        .technologies
        .iter()
        .map(|t| registry.lookup(t))
        .collect();
    assert_eq!(icons.len(), 6);
    assert!(icons.iter().all(|icon| *icon != Icon::Default));
}
