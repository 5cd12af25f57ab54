//! Controller template bodies.
//!
//! Two families (auth entity vs plain CRUD), each with a relational (ORM)
//! and a document (ODM) variant. Auth controllers hash an incoming
//! `password` field when one is present and issue a signed token on login;
//! the secret is referenced from the generated code's environment, never
//! read by the scaffolder itself.

/// Auth-entity controller for the relational path.
pub const CONTROLLER_AUTH_RELATIONAL: &str = r"const { {{entity}} } = require('../models');
const jwt = require('jsonwebtoken');
const bcrypt = require('bcryptjs');

// Register {{entity}}
exports.create = async (req, res) => {
  try {
    // Hash password if it exists in request body
    if (req.body.password) {
      const salt = await bcrypt.genSalt(10);
      req.body.password = await bcrypt.hash(req.body.password, salt);
    }

    const {{entity_camel}} = await {{entity}}.create(req.body);
    res.status(201).json({{entity_camel}});
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

// Login {{entity}}
exports.login = async (req, res) => {
  try {
    const { email, password } = req.body;
    const {{entity_camel}} = await {{entity}}.findOne({ where: { email } });

    if (!{{entity_camel}}) {
      return res.status(404).json({ message: '{{entity}} not found' });
    }

    const validPassword = await bcrypt.compare(password, {{entity_camel}}.password);
    if (!validPassword) {
      return res.status(401).json({ message: 'Invalid credentials' });
    }

    if (!process.env.JWT_SECRET) {
      throw new Error('JWT_SECRET is not defined in environment variables');
    }

    const token = jwt.sign(
      { id: {{entity_camel}}.id, email: {{entity_camel}}.email },
      process.env.JWT_SECRET,
      { expiresIn: '1h' }
    );

    res.status(200).json({ token });
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

// Get profile
exports.getProfile = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findByPk(req.user.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });

    // Never return the stored password hash
    const safe = { ...{{entity_camel}}.get() };
    delete safe.password;

    res.status(200).json(safe);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

// Update profile
exports.updateProfile = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findByPk(req.user.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });

    // Hash new password if it is being updated
    if (req.body.password) {
      const salt = await bcrypt.genSalt(10);
      req.body.password = await bcrypt.hash(req.body.password, salt);
    }

    await {{entity_camel}}.update(req.body);
    res.status(200).json({{entity_camel}});
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};
";

/// Auth-entity controller for the document path.
pub const CONTROLLER_AUTH_DOCUMENT: &str = r"const {{entity}} = require('../models/{{entity_camel}}');
const jwt = require('jsonwebtoken');
const bcrypt = require('bcryptjs');

// Register {{entity}}
exports.create = async (req, res) => {
  try {
    // Hash password if it exists in request body
    if (req.body.password) {
      const salt = await bcrypt.genSalt(10);
      req.body.password = await bcrypt.hash(req.body.password, salt);
    }

    const {{entity_camel}} = new {{entity}}(req.body);
    await {{entity_camel}}.save();
    res.status(201).json({{entity_camel}});
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

// Login {{entity}}
exports.login = async (req, res) => {
  try {
    const { email, password } = req.body;
    const {{entity_camel}} = await {{entity}}.findOne({ email });

    if (!{{entity_camel}}) {
      return res.status(404).json({ message: '{{entity}} not found' });
    }

    const validPassword = await bcrypt.compare(password, {{entity_camel}}.password);
    if (!validPassword) {
      return res.status(401).json({ message: 'Invalid credentials' });
    }

    if (!process.env.JWT_SECRET) {
      throw new Error('JWT_SECRET is not defined in environment variables');
    }

    const token = jwt.sign(
      { id: {{entity_camel}}.id, email: {{entity_camel}}.email },
      process.env.JWT_SECRET,
      { expiresIn: '1h' }
    );

    res.status(200).json({ token });
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

// Get profile
exports.getProfile = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findById(req.user.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });

    // Never return the stored password hash
    const safe = {{entity_camel}}.toObject();
    delete safe.password;

    res.status(200).json(safe);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

// Update profile
exports.updateProfile = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findById(req.user.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });

    // Hash new password if it is being updated
    if (req.body.password) {
      const salt = await bcrypt.genSalt(10);
      req.body.password = await bcrypt.hash(req.body.password, salt);
    }

    Object.assign({{entity_camel}}, req.body);
    await {{entity_camel}}.save();
    res.status(200).json({{entity_camel}});
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};
";

/// CRUD controller for the relational path.
pub const CONTROLLER_CRUD_RELATIONAL: &str = r"const { {{entity}} } = require('../models');

exports.create = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.create(req.body);
    res.status(201).json({{entity_camel}});
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

exports.getAll = async (req, res) => {
  try {
    const records = await {{entity}}.findAll();
    res.status(200).json(records);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

exports.getById = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findByPk(req.params.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });
    res.status(200).json({{entity_camel}});
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

exports.update = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findByPk(req.params.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });
    await {{entity_camel}}.update(req.body);
    res.status(200).json({{entity_camel}});
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

exports.delete = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findByPk(req.params.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });
    await {{entity_camel}}.destroy();
    res.status(204).json();
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};
";

/// CRUD controller for the document path.
pub const CONTROLLER_CRUD_DOCUMENT: &str = r"const {{entity}} = require('../models/{{entity_camel}}');

exports.create = async (req, res) => {
  try {
    const {{entity_camel}} = new {{entity}}(req.body);
    const result = await {{entity_camel}}.save();
    res.status(201).json(result);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

exports.getAll = async (req, res) => {
  try {
    const records = await {{entity}}.find();
    res.status(200).json(records);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

exports.getById = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findById(req.params.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });
    res.status(200).json({{entity_camel}});
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

exports.update = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findById(req.params.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });
    const updated = await {{entity}}.findByIdAndUpdate(req.params.id, req.body, { new: true });
    res.status(200).json(updated);
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};

exports.delete = async (req, res) => {
  try {
    const {{entity_camel}} = await {{entity}}.findById(req.params.id);
    if (!{{entity_camel}}) return res.status(404).json({ message: '{{entity}} not found' });
    await {{entity}}.findByIdAndDelete(req.params.id);
    res.status(204).json();
  } catch (error) {
    res.status(400).json({ message: error.message });
  }
};
";
