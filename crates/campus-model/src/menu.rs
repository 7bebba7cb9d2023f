//! Weekly mess menu.

use chrono::Weekday;
use serde::Serialize;

use crate::catalog::WEEKLY_MENU;

/// A meal of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
        }
    }
}

/// The menu for one day of the week.
///
/// Meals are stored as the comma-separated dish lists printed on the mess
/// notice board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuDay {
    pub day: Weekday,
    pub breakfast: &'static str,
    pub lunch: &'static str,
    pub dinner: &'static str,
}

impl MenuDay {
    /// Raw text for a meal.
    pub fn meal(&self, meal: Meal) -> &'static str {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Dinner => self.dinner,
        }
    }

    /// Individual dishes of a meal, in printed order.
    pub fn dishes(&self, meal: Meal) -> impl Iterator<Item = &'static str> {
        self.meal(meal)
            .split(',')
            .map(str::trim)
            .filter(|dish| !dish.is_empty())
    }

    /// Short day label ("Mon", "Tue", ...).
    pub fn day_label(&self) -> String {
        self.day.to_string()
    }
}

/// The menu row for a weekday.
pub fn menu_for(day: Weekday) -> Option<&'static MenuDay> {
    WEEKLY_MENU.iter().find(|row| row.day == day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dishes_split_and_trim() {
        let monday = menu_for(Weekday::Mon).unwrap();
        let dishes: Vec<_> = monday.dishes(Meal::Breakfast).collect();
        assert_eq!(
            dishes,
            vec!["TEA", "COFFEE", "IDLY SAMBAR", "CHUTNEY", "STUFF KULCHA"]
        );
    }

    #[test]
    fn test_every_weekday_has_a_row() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert!(menu_for(day).is_some(), "missing menu for {day}");
        }
    }

    #[test]
    fn test_day_label() {
        assert_eq!(menu_for(Weekday::Sun).unwrap().day_label(), "Sun");
    }
}
