/// Route access levels. Every write and every admin view sits behind the
/// access code gate; the public site only reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    BrowseListings,
    ListDevelopers,
    ViewDeveloperPage,
    ListTasks,
    SubmitEnquiry,
    VerifyAccessCode,
    Logout,
    CreateProperty,
    UpdateProperty,
    CreateDeveloper,
    UpdateDeveloper,
    CreateTask,
    UpdateTask,
    CreateTest,
    UpdateTest,
    DeleteRecord,
    UploadFile,
    ViewDashboard,
    ViewEditForm,
}

pub fn access_for(operation: Operation) -> Access {
    match operation {
        Operation::BrowseListings
        | Operation::ListDevelopers
        | Operation::ViewDeveloperPage
        | Operation::ListTasks
        | Operation::SubmitEnquiry
        | Operation::VerifyAccessCode
        | Operation::Logout => Access::Public,

        Operation::CreateProperty
        | Operation::UpdateProperty
        | Operation::CreateDeveloper
        | Operation::UpdateDeveloper
        | Operation::CreateTask
        | Operation::UpdateTask
        | Operation::CreateTest
        | Operation::UpdateTest
        | Operation::DeleteRecord
        | Operation::UploadFile
        | Operation::ViewDashboard
        | Operation::ViewEditForm => Access::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_mutation_requires_admin() {
        let mutations = [
            Operation::CreateProperty,
            Operation::UpdateProperty,
            Operation::CreateDeveloper,
            Operation::UpdateDeveloper,
            Operation::CreateTask,
            Operation::UpdateTask,
            Operation::CreateTest,
            Operation::UpdateTest,
            Operation::DeleteRecord,
            Operation::UploadFile,
        ];

        for operation in mutations {
            assert_eq!(access_for(operation), Access::Admin);
        }
    }

    #[test]
    fn admin_views_require_admin() {
        assert_eq!(access_for(Operation::ViewDashboard), Access::Admin);
        assert_eq!(access_for(Operation::ViewEditForm), Access::Admin);
    }

    #[test]
    fn the_public_site_and_the_gate_itself_stay_open() {
        let public = [
            Operation::BrowseListings,
            Operation::ListDevelopers,
            Operation::ViewDeveloperPage,
            Operation::ListTasks,
            Operation::SubmitEnquiry,
            Operation::VerifyAccessCode,
            Operation::Logout,
        ];

        for operation in public {
            assert_eq!(access_for(operation), Access::Public);
        }
    }
}
