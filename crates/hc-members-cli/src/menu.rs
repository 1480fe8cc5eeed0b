//! Menu loop and validated prompts.
//!
//! Thin glue over the core: every accepted value has passed the shared
//! [`Limits`] validators before it reaches the registry, and the prompts
//! echo the configured bounds so prompt text can never diverge from the
//! rules.

use std::io::{self, BufRead};

use hc_members_core::{
    Gender, Limits, MemberRecord, MemberRegistry, MemberStore, NewMember,
};

/// Visit count below which a member shows up in the low-visits report.
const LOW_VISIT_THRESHOLD: u32 = 5;

/// Interactive menu over a member registry.
pub struct Menu<S, R> {
    registry: MemberRegistry<S>,
    input: R,
    selected: Option<String>,
    limits: Limits,
}

impl<S: MemberStore, R: BufRead> Menu<S, R> {
    pub fn new(registry: MemberRegistry<S>, input: R) -> Self {
        Self {
            registry,
            input,
            selected: None,
            limits: Limits::DEFAULT,
        }
    }

    /// Run the main loop until the operator chooses to exit.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_main_menu();
            match self.menu_choice(1, 9)? {
                1 => self.display_all_members(),
                2 => self.select_member()?,
                3 => self.add_new_member()?,
                4 => self.stats_menu()?,
                5 => self.record_visit()?,
                6 => self.update_blood_pressure()?,
                7 => self.record_consultation()?,
                8 => self.update_weight_and_age()?,
                _ => {
                    println!("Thanks for using the Health Centre Member System. Goodbye!");
                    return Ok(());
                }
            }
        }
    }

    fn print_main_menu(&self) {
        println!("================================================");
        println!("Health Centre Member System - Main Menu");
        println!("================================================");
        let selected = self.selected.as_deref().unwrap_or("None");
        println!("Currently selected member: {selected}");
        println!();
        println!("1. Display all member details");
        println!("2. Display/select member detail");
        println!("3. Add new health centre member");
        println!("4. Review members (stats menu)");
        println!("5. Record member visit");
        println!("6. Update blood pressure");
        println!("7. Record F2F consultation");
        println!("8. Update weight and age");
        println!("9. Exit");
        println!();
        print!("Please enter menu choice = ");
        flush();
    }

    fn stats_menu(&mut self) -> io::Result<()> {
        loop {
            println!("================================================");
            println!("Stats Menu");
            println!("================================================");
            println!("1. Display members by gender");
            println!("2. Display members with high blood pressure");
            println!("3. Display members without a yearly F2F consultation");
            println!(
                "4. Display members with fewer than {LOW_VISIT_THRESHOLD} centre visits"
            );
            println!("5. Reset all members' F2F consultation to false");
            println!("6. Return to main menu");
            println!();
            print!("Please enter menu choice = ");
            flush();

            match self.menu_choice(1, 6)? {
                1 => {
                    let gender = self.prompt_gender()?;
                    let result = self.registry.filter_by_gender(gender);
                    print_report(&result, &format!("No {} members found.", gender.label()));
                }
                2 => {
                    let result = self.registry.filter_high_blood_pressure();
                    print_report(&result, "No members with high blood pressure found.");
                }
                3 => {
                    let result = self.registry.filter_due_for_consultation();
                    print_report(
                        &result,
                        "All members have completed their yearly consultation.",
                    );
                }
                4 => {
                    let result = self.registry.filter_low_visits(LOW_VISIT_THRESHOLD);
                    print_report(
                        &result,
                        &format!("All members have {LOW_VISIT_THRESHOLD} or more visits."),
                    );
                }
                5 => self.reset_all_consultations()?,
                _ => return Ok(()),
            }
        }
    }

    fn display_all_members(&self) {
        println!("================================================");
        println!("ALL HEALTH CENTRE MEMBERS");
        println!("================================================");
        if self.registry.count() == 0 {
            println!("No members registered in the system.");
            return;
        }
        print_table_header();
        for member in self.registry.members() {
            println!("{}", member.summary_line());
        }
        println!("Total members: {}", self.registry.count());
    }

    fn select_member(&mut self) -> io::Result<()> {
        print!("Enter HC number to select: ");
        flush();
        let id = self.read_line()?;
        match self.registry.find_by_id(&id) {
            Some(member) => {
                print_member_details(member);
                self.selected = Some(id);
                println!("Member selected successfully.");
            }
            None => println!("Member not found."),
        }
        Ok(())
    }

    fn add_new_member(&mut self) -> io::Result<()> {
        println!("================================================");
        println!("ADD NEW HEALTH CENTRE MEMBER");
        println!("================================================");

        let forename = self.prompt_name("forename")?;
        let surname = self.prompt_name("surname")?;
        let gender = self.prompt_gender()?;
        let age = self.prompt_age()?;
        let weight = self.prompt_weight()?;
        let address = self.prompt_address()?;

        let added = self.registry.add_member(NewMember {
            forename,
            surname,
            gender,
            age,
            weight,
            address,
        });
        println!("New member added successfully. ID: {}", added.record.id());
        if added.write_error.is_some() {
            println!("Warning: member could not be saved and is held in memory only.");
        }
        Ok(())
    }

    fn record_visit(&mut self) -> io::Result<()> {
        if let Some(member) = self.selected_member_mut() {
            member.record_visit();
            println!("Visit recorded. Total visits: {}", member.visit_tally());
        }
        Ok(())
    }

    fn update_blood_pressure(&mut self) -> io::Result<()> {
        if self.selected_member_mut().is_none() {
            return Ok(());
        }
        let systolic = self.prompt_systolic()?;
        let diastolic = self.prompt_diastolic()?;

        // Guard again so the prompts above can borrow self freely
        let Some(member) = self.selected_member_mut() else {
            return Ok(());
        };
        match member.update_blood_pressure(systolic, diastolic) {
            Ok(category) => {
                println!("Blood pressure updated successfully!");
                println!(
                    "New blood pressure classification: {}",
                    category.as_str().to_uppercase()
                );
            }
            Err(err) => println!("{err}"),
        }
        Ok(())
    }

    fn record_consultation(&mut self) -> io::Result<()> {
        if let Some(member) = self.selected_member_mut() {
            member.set_consultation_done(true);
            println!(
                "F2F consultation recorded for {} {}.",
                member.forename(),
                member.surname()
            );
        }
        Ok(())
    }

    fn update_weight_and_age(&mut self) -> io::Result<()> {
        let Some(member) = self.selected_member_mut() else {
            return Ok(());
        };
        println!("Current weight: {} kg", member.weight());
        println!("Current age: {} years", member.age());

        let weight = self.prompt_weight()?;
        let age = self.prompt_age()?;

        let Some(member) = self.selected_member_mut() else {
            return Ok(());
        };
        if member.set_weight(weight) && member.set_age(age) {
            println!("Weight and age updated successfully!");
        }
        Ok(())
    }

    fn reset_all_consultations(&mut self) -> io::Result<()> {
        print!("Are you sure you want to reset ALL consultations? (Y/N): ");
        flush();
        if self.read_line()?.eq_ignore_ascii_case("y") {
            self.registry.reset_all_consultations();
            println!("All member consultations have been reset to false.");
        } else {
            println!("Operation has been cancelled.");
        }
        Ok(())
    }

    /// Mutable access to the selected member; reports when none is selected.
    fn selected_member_mut(&mut self) -> Option<&mut MemberRecord> {
        let Some(id) = self.selected.clone() else {
            println!("No member selected. Use option 2 to select a member first.");
            return None;
        };
        self.registry.find_by_id_mut(&id)
    }

    // =========================================================================
    // Validated prompts
    // =========================================================================

    fn menu_choice(&mut self, min: u32, max: u32) -> io::Result<u32> {
        loop {
            match self.read_line()?.parse::<u32>() {
                Ok(choice) if choice >= min && choice <= max => return Ok(choice),
                _ => {
                    print!("Please enter a number between {min} and {max}: ");
                    flush();
                }
            }
        }
    }

    fn prompt_name(&mut self, field: &str) -> io::Result<String> {
        loop {
            print!(
                "Enter {field} (minimum {} characters): ",
                self.limits.min_name_len
            );
            flush();
            let name = self.read_line()?;
            if self.limits.valid_name(&name) {
                return Ok(name);
            }
            println!("The {field} must be at least {} characters.", self.limits.min_name_len);
        }
    }

    fn prompt_gender(&mut self) -> io::Result<Gender> {
        loop {
            print!("Enter gender (M/F): ");
            flush();
            let line = self.read_line()?;
            if let Some(gender) = line.chars().next().filter(|_| line.len() == 1).and_then(Gender::from_char) {
                return Ok(gender);
            }
            println!("Please enter 'M' for Male or 'F' for Female.");
        }
    }

    fn prompt_age(&mut self) -> io::Result<u32> {
        loop {
            print!(
                "Enter age ({}-{}): ",
                self.limits.min_age, self.limits.max_age
            );
            flush();
            match self.read_line()?.parse::<u32>() {
                Ok(age) if self.limits.valid_age(age) => return Ok(age),
                Ok(_) => println!("Invalid age range."),
                Err(_) => println!("Please enter a valid number."),
            }
        }
    }

    fn prompt_weight(&mut self) -> io::Result<f64> {
        loop {
            print!(
                "Enter weight in kg ({}-{}): ",
                self.limits.min_weight, self.limits.max_weight
            );
            flush();
            match self.read_line()?.parse::<f64>() {
                Ok(weight) if self.limits.valid_weight(weight) => return Ok(weight),
                Ok(_) => println!("Invalid weight range."),
                Err(_) => println!("Please enter a valid number."),
            }
        }
    }

    fn prompt_address(&mut self) -> io::Result<String> {
        loop {
            print!(
                "Enter address ({}-{} characters): ",
                self.limits.min_address_len, self.limits.max_address_len
            );
            flush();
            let address = self.read_line()?;
            if self.limits.valid_address(&address) {
                return Ok(address);
            }
            println!(
                "The address must be between {} and {} characters.",
                self.limits.min_address_len, self.limits.max_address_len
            );
        }
    }

    fn prompt_systolic(&mut self) -> io::Result<u32> {
        loop {
            print!(
                "Enter systolic pressure ({}-{}): ",
                self.limits.min_systolic, self.limits.max_systolic
            );
            flush();
            match self.read_line()?.parse::<u32>() {
                Ok(value) if self.limits.valid_systolic(value) => return Ok(value),
                Ok(_) => println!("Systolic reading out of range."),
                Err(_) => println!("Please enter a valid number."),
            }
        }
    }

    fn prompt_diastolic(&mut self) -> io::Result<u32> {
        loop {
            print!(
                "Enter diastolic pressure ({}-{}): ",
                self.limits.min_diastolic, self.limits.max_diastolic
            );
            flush();
            match self.read_line()?.parse::<u32>() {
                Ok(value) if self.limits.valid_diastolic(value) => return Ok(value),
                Ok(_) => println!("Diastolic reading out of range."),
                Err(_) => println!("Please enter a valid number."),
            }
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        let n = self.input.read_line(&mut buf)?;
        if n == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(buf.trim().to_string())
    }
}

fn flush() {
    use std::io::Write;
    let _ = io::stdout().flush();
}

fn print_table_header() {
    println!(
        "{:<10} {:<15} {:<15} {:<6} {:<5} {:<10}",
        "ID", "First Name", "Surname", "Sex", "Age", "BP"
    );
    println!("----------------------------------------------------------------");
}

fn print_report(members: &[&MemberRecord], empty_message: &str) {
    if members.is_empty() {
        println!("{empty_message}");
        return;
    }
    print_table_header();
    for member in members {
        println!("{}", member.summary_line());
    }
}

fn print_member_details(member: &MemberRecord) {
    println!("======================================================================");
    println!("              HEALTH CENTRE MEMBER DETAILS");
    println!("======================================================================");
    println!("HC Number:         {}", member.id());
    println!("Name:              {} {}", member.forename(), member.surname());
    println!("Gender:            {}", member.gender().label());
    println!("Age:               {} years", member.age());
    println!("Weight:            {:.1} kg", member.weight());
    println!("Address:           {}", member.address());
    println!("Blood Pressure:    {}", member.blood_pressure().as_str());
    println!(
        "F2F Consultation:  {}",
        if member.consultation_done() { "Completed" } else { "Due" }
    );
    println!("Centre Visits:     {}", member.visit_tally());
    println!("======================================================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use hc_members_core::{BpCategory, Database};
    use std::io::Cursor;

    fn run_script(script: &str) -> MemberRegistry<Database> {
        let db = Database::open_in_memory().unwrap();
        let registry = MemberRegistry::open(db);
        let mut menu = Menu::new(registry, Cursor::new(script.to_string()));
        menu.run().unwrap();
        menu.registry
    }

    #[test]
    fn test_scripted_registration_and_reading() {
        // Add a member (with one invalid age attempt), select them, record a
        // high reading and a visit, then exit.
        let script = "3\nAnna\nLee\nF\n130\n30\n65.0\n1 Main St\n\
                      2\n100001\n6\n150\n95\n5\n9\n";
        let registry = run_script(script);

        assert_eq!(registry.count(), 1);
        let anna = registry.find_by_id("100001").unwrap();
        assert_eq!(anna.age(), 30);
        assert_eq!(anna.blood_pressure(), BpCategory::High);
        assert_eq!(anna.visit_tally(), 1);
    }

    #[test]
    fn test_operations_without_selection_are_safe() {
        // Visit, consultation, and exit with nothing selected
        let registry = run_script("5\n7\n9\n");
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let script = "3\nAnna\nLee\nF\n30\n65.0\n1 Main St\n\
                      2\n100001\n7\n4\n5\nN\n6\n9\n";
        let registry = run_script(script);

        // Reset was declined, so the consultation flag survives
        assert!(registry.find_by_id("100001").unwrap().consultation_done());
    }
}
